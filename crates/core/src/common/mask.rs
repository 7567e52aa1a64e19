/// 打码部分的固定宽度，与原值长度无关
pub const MASK_WIDTH: usize = 6;

/// # Summary
/// 脱敏: 只保留最后 `visible_tail` 个字符，前面统一替换为 [`MASK_WIDTH`] 个 `*`。
///
/// # Logic
/// 按字符 (而非字节) 计数。`visible_tail` 不小于字符数时整体打码，
/// 输出不随原值长度变化，日志中无法推断密码或验证码的位数。空值原样返回。
pub fn mask(value: &str, visible_tail: usize) -> String {
    let total = value.chars().count();
    if total == 0 {
        return String::new();
    }
    let mut masked = "*".repeat(MASK_WIDTH);
    if visible_tail < total {
        masked.extend(value.chars().skip(total - visible_tail));
    }
    masked
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_keeps_tail() {
        assert_eq!(mask("ABCDE1234F", 2), "******4F");
        assert_eq!(mask("9876543210", 4), "******3210");
    }

    #[test]
    fn test_hidden_secrets_have_fixed_width() {
        assert_eq!(mask("secret", 0), "******");
        assert_eq!(mask("a-much-longer-password", 0), "******");
        assert_eq!(mask("ab", 4), "******");
        assert_eq!(mask("", 2), "");
    }

    #[test]
    fn test_mask_counts_chars() {
        assert_eq!(mask("pässwörd", 1), "******d");
    }
}
