// ==========================================
// 国际化 (i18n) 模块
// ==========================================
// 使用 rust-i18n 库
// 支持中文（默认）、法文与英文
// ==========================================
// 注意: rust_i18n::i18n! 宏已在 lib.rs 中初始化
// ==========================================

/// 获取当前语言
pub fn current_locale() -> String {
    rust_i18n::locale().to_string()
}

/// 设置语言
///
/// # 参数
/// - locale: 语言代码（"zh-CN" / "fr" / "en"）
pub fn set_locale(locale: &str) {
    rust_i18n::set_locale(locale);
}

/// 翻译消息（无参数）
///
/// # 示例
/// ```no_run
/// use guard_rotation::i18n::t;
/// let msg = t("error.missing_reference_date");
/// ```
pub fn t(key: &str) -> String {
    rust_i18n::t!(key).to_string()
}

/// 翻译消息（带参数）
///
/// # 示例
/// ```no_run
/// use guard_rotation::i18n::t_with_args;
/// let msg = t_with_args("error.range_too_long", &[("days", "400"), ("max_days", "366")]);
/// ```
pub fn t_with_args(key: &str, args: &[(&str, &str)]) -> String {
    let mut result = rust_i18n::t!(key).to_string();
    for (k, v) in args {
        let placeholder = format!("%{{{}}}", k);
        result = result.replace(&placeholder, v);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::{PatternMode, RotationType};
    use crate::engine::error::ConfigError;
    use std::sync::Mutex;

    // rust-i18n 的 locale 为全局状态，且 Rust 测试默认并行执行；
    // 为避免测试互相干扰，这里对 i18n 相关测试串行化。
    static LOCALE_TEST_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_set_locale() {
        let _guard = LOCALE_TEST_LOCK.lock().unwrap();
        set_locale("fr");
        assert_eq!(current_locale(), "fr");

        set_locale("en");
        assert_eq!(current_locale(), "en");

        // 恢复默认语言
        set_locale("zh-CN");
        assert_eq!(current_locale(), "zh-CN");
    }

    #[test]
    fn test_labels() {
        let _guard = LOCALE_TEST_LOCK.lock().unwrap();
        set_locale("fr");
        assert_eq!(PatternMode::TwoDay.label(), "Tous les deux jours");
        assert_eq!(RotationType::Custom.label(), "Personnalisé");

        set_locale("en");
        assert_eq!(PatternMode::Weekly.label(), "Weekly");

        set_locale("zh-CN");
        assert_eq!(PatternMode::Daily.label(), "每日轮换");
    }

    #[test]
    fn test_error_message_with_args() {
        let _guard = LOCALE_TEST_LOCK.lock().unwrap();
        set_locale("en");
        let msg = ConfigError::RangeTooLong {
            days: 400,
            max_days: 366,
        }
        .localized_message();
        assert!(msg.contains("400"));
        assert!(msg.contains("366"));

        set_locale("zh-CN");
    }
}
