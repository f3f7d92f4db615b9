/// Async counterpart to the standard library's `TryFrom<T>` trait.
///
/// Used where building a value needs I/O on the runtime, such as hashing the
/// contents of a file named by a path.
pub trait AsyncTryFrom<T>: Sized {
    /// The error type that can occur during conversion.
    type Error;

    /// Performs the fallible asynchronous conversion from `T` to `Self`.
    async fn async_try_from(value: T) -> Result<Self, Self::Error>;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct NumberWrapper(i32);

    impl AsyncTryFrom<&str> for NumberWrapper {
        type Error = std::num::ParseIntError;

        async fn async_try_from(value: &str) -> Result<Self, Self::Error> {
            Ok(NumberWrapper(value.parse::<i32>()?))
        }
    }

    #[compio::test]
    async fn test_async_try_from_success() {
        let wrapper = NumberWrapper::async_try_from("42").await.unwrap();
        assert_eq!(wrapper.0, 42);
    }

    #[compio::test]
    async fn test_async_try_from_failure() {
        let result = NumberWrapper::async_try_from("not_a_number").await;
        assert!(result.is_err());
    }
}
