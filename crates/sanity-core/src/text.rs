//! Small string helpers shared by the normalizers.

/// Returns every ASCII digit of `value`, in original order.
pub fn ascii_digits(value: &str) -> String {
    value.chars().filter(char::is_ascii_digit).collect()
}

/// Left-pads `value` with `fill` until it is `target_len` characters long.
///
/// Values already at or past `target_len` are returned unchanged.
///
/// # Examples
///
/// ```
/// use sanity_core::pad_left;
///
/// assert_eq!(pad_left("210", '0', 5), "00210");
/// assert_eq!(pad_left("90210", '0', 5), "90210");
/// ```
pub fn pad_left(value: &str, fill: char, target_len: usize) -> String {
    let len = value.chars().count();
    if len >= target_len {
        return value.to_string();
    }
    let mut padded = String::with_capacity(target_len);
    padded.extend(std::iter::repeat_n(fill, target_len - len));
    padded.push_str(value);
    padded
}
