/// Splits a whitespace-separated class attribute into tokens.
///
/// Order and duplicates are kept: every token is shown to the user as
/// written, so `"p-4  m-2 p-4"` yields three tokens.
pub fn split_class_list(input: &str) -> Vec<&str> {
    input.split_whitespace().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_collapses_whitespace() {
        assert_eq!(split_class_list("p-4  m-2\tflex"), vec!["p-4", "m-2", "flex"]);
    }

    #[test]
    fn test_split_keeps_order_and_duplicates() {
        assert_eq!(split_class_list("m-2 p-4 m-2"), vec!["m-2", "p-4", "m-2"]);
    }

    #[test]
    fn test_split_empty() {
        assert!(split_class_list("").is_empty());
        assert!(split_class_list("   \n ").is_empty());
    }
}
