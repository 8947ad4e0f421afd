use crate::utils::error::{MamaError, Result};
use url::Url;

/// 表單滑桿的年齡範圍
pub const AGE_RANGE: (i32, i32) = (15, 45);
/// 表單滑桿的孕週範圍
pub const WEEKS_RANGE: (i32, i32) = (1, 42);

pub const EXPORT_FORMATS: [&str; 2] = ["csv", "json"];

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(MamaError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(MamaError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(MamaError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(MamaError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(MamaError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(MamaError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(MamaError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

/// 與 `ExportFormat` 的解析一致：忽略大小寫與前後空白
pub fn validate_export_format(field_name: &str, format: &str) -> Result<()> {
    let normalized = format.trim().to_ascii_lowercase();
    if !EXPORT_FORMATS.contains(&normalized.as_str()) {
        return Err(MamaError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: format.to_string(),
            reason: format!(
                "Unsupported format. Valid formats: {}",
                EXPORT_FORMATS.join(", ")
            ),
        });
    }
    Ok(())
}

/// 驗證與表單相同的輸入範圍；評分函式本身不做範圍檢查
pub fn validate_form_input(age: i32, gestational_weeks: i32) -> Result<()> {
    validate_range("age", age, AGE_RANGE.0, AGE_RANGE.1)?;
    validate_range("gestational_weeks", gestational_weeks, WEEKS_RANGE.0, WEEKS_RANGE.1)?;
    Ok(())
}
