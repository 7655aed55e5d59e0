// ==========================================
// 传输监控系统 - 界面文案 (i18n)
// ==========================================
// 职责: 状态标签、图例标题、网格提示的多语言文案
// 语言: es（默认，fallback）、en；文案在 locales/*.yml
// 红线: 未提供的语言代码回退为 es，不让界面出现原始 key
// ==========================================

/// 兜底语言
pub const LOCALE_DEFAULT: &str = "es";

/// 当前界面语言代码
pub fn current_locale() -> String {
    rust_i18n::locale().to_string()
}

/// 切换界面语言
///
/// 未收录的语言代码（如配置里的 "fr"）记录 warn 并回退为 es
pub fn set_locale(locale: &str) {
    let locale = locale.trim();
    if rust_i18n::available_locales!().iter().any(|l| *l == locale) {
        rust_i18n::set_locale(locale);
    } else {
        tracing::warn!(locale, fallback = LOCALE_DEFAULT, "未收录的语言，使用默认语言");
        rust_i18n::set_locale(LOCALE_DEFAULT);
    }
}

/// 按 key 取文案，例如 `t("estado.tarde")` → "Transmitió Tarde"
pub fn t(key: &str) -> String {
    rust_i18n::t!(key).to_string()
}

/// 取文案并填入 `%{名称}` 占位符
///
/// ```no_run
/// use transmisiones_control::i18n::t_with_args;
/// let aviso = t_with_args("grid.sin_programas", &[("filial", "Central")]);
/// ```
pub fn t_with_args(key: &str, args: &[(&str, &str)]) -> String {
    args.iter().fold(t(key), |texto, (nombre, valor)| {
        texto.replace(&format!("%{{{}}}", nombre), valor)
    })
}
