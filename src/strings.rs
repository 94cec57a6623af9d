//! String operations: reversal and palindrome checking. Both are
//! case-sensitive and whitespace-sensitive, and work char-wise rather than
//! byte-wise so multi-byte characters survive reversal.

/// Return the string with its characters in reverse order.
pub fn reverse(s: &str) -> String {
    s.chars().rev().collect()
}

/// Check whether the string reads the same forwards and backwards.
///
/// The empty string counts as a palindrome.
pub fn is_palindrome(s: &str) -> bool {
    s.chars().eq(s.chars().rev())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reverse_correct() {
        assert_eq!("olleh", reverse("hello"));
        assert_eq!("dlroW olleH", reverse("Hello World"));
        assert_eq!("", reverse(""));
        assert_eq!("a", reverse("a"));
        assert_eq!("éba", reverse("abé"));
    }

    #[test]
    fn reverse_twice_is_identity() {
        for s in ["", "a", "hello", "Hello World", "racecar"] {
            assert_eq!(s, reverse(&reverse(s)));
        }
    }

    #[test]
    fn is_palindrome_correct() {
        assert!(is_palindrome("racecar"));
        assert!(is_palindrome(""));
        assert!(is_palindrome("a"));
        assert!(is_palindrome("abba"));
        assert!(!is_palindrome("hello"));
        // Case- and whitespace-sensitive.
        assert!(!is_palindrome("Racecar"));
        assert!(!is_palindrome("A man a plan a canal Panama"));
    }
}
