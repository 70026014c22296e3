use rand::Rng;

/// Generates a random alphanumeric secret of the given length
pub fn create_random_secret(secret_len: usize) -> String {
    let rng = rand::thread_rng();
    rng.sample_iter(&rand::distributions::Alphanumeric)
        .take(secret_len)
        .map(char::from)
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn it_creates_random_secret_of_given_length() {
        for len in [1, 16, 30, 64] {
            assert_eq!(create_random_secret(len).len(), len);
        }
    }

    #[test]
    fn secrets_are_unique() {
        assert_ne!(create_random_secret(30), create_random_secret(30));
    }
}
