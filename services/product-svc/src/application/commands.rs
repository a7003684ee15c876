//! 命令定义与输入校验

use std::sync::LazyLock;

use medikart_errors::{AppError, AppResult};
use regex::Regex;
use uuid::Uuid;

// 只接受 S3 虚拟主机风格的图片地址
static S3_URL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^https://[^.]+\.s3\.[^.]+\.amazonaws\.com/").unwrap()
});

pub struct CreateProductCommand {
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub stock: i32,
    pub requires_prescription: bool,
    pub image_url: Option<String>,
}

impl CreateProductCommand {
    pub fn validate(&self) -> AppResult<()> {
        validate_product_fields(
            &self.name,
            self.description.as_deref(),
            self.price,
            self.stock,
            self.image_url.as_deref(),
        )
    }
}

pub struct UpdateProductCommand {
    pub product_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub image_url: Option<String>,
}

impl UpdateProductCommand {
    pub fn validate(&self) -> AppResult<()> {
        // 更新不改库存，stock 传 0 只为复用字段规则
        validate_product_fields(
            &self.name,
            self.description.as_deref(),
            self.price,
            0,
            self.image_url.as_deref(),
        )
    }
}

pub struct AdjustStockCommand {
    pub product_id: Uuid,
    pub change_type: String,
    pub quantity: i32,
}

/// 商品字段校验，错误逐条收集后一次性返回
fn validate_product_fields(
    name: &str,
    description: Option<&str>,
    price: f64,
    stock: i32,
    image_url: Option<&str>,
) -> AppResult<()> {
    let mut errors: Vec<String> = Vec::new();

    if name.trim().is_empty() {
        errors.push("name: Name is required".to_string());
    }

    if description.map(str::trim).unwrap_or_default().is_empty() {
        errors.push("description: Description is required".to_string());
    }

    if price <= 0.0 {
        errors.push("price: Price must be greater than 0".to_string());
    }

    if stock < 0 {
        errors.push("stock: Stock must be greater than or equal to 0".to_string());
    }

    if let Some(url) = image_url {
        if !S3_URL_PATTERN.is_match(url.trim()) {
            errors.push("image_url: Invalid S3 image URL".to_string());
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(AppError::validation(errors.join("; ")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_create() -> CreateProductCommand {
        CreateProductCommand {
            name: "Aspirin".to_string(),
            description: Some("Pain relief".to_string()),
            price: 9.99,
            stock: 100,
            requires_prescription: false,
            image_url: None,
        }
    }

    #[test]
    fn test_valid_command_passes() {
        assert!(valid_create().validate().is_ok());
    }

    #[test]
    fn test_blank_name_is_rejected() {
        let mut cmd = valid_create();
        cmd.name = "   ".to_string();
        let err = cmd.validate().unwrap_err();
        assert!(err.to_string().contains("Name is required"));
    }

    #[test]
    fn test_missing_description_is_rejected() {
        let mut cmd = valid_create();
        cmd.description = None;
        assert!(cmd.validate().is_err());

        cmd.description = Some("  ".to_string());
        assert!(cmd.validate().is_err());
    }

    #[test]
    fn test_non_positive_price_is_rejected() {
        let mut cmd = valid_create();
        cmd.price = 0.0;
        assert!(cmd.validate().is_err());

        cmd.price = -1.0;
        assert!(cmd.validate().is_err());
    }

    #[test]
    fn test_negative_stock_is_rejected() {
        let mut cmd = valid_create();
        cmd.stock = -1;
        let err = cmd.validate().unwrap_err();
        assert!(err.to_string().contains("stock"));
    }

    #[test]
    fn test_image_url_must_point_at_s3() {
        let mut cmd = valid_create();
        cmd.image_url = Some("https://mybucket.s3.us-east-1.amazonaws.com/aspirin.png".to_string());
        assert!(cmd.validate().is_ok());

        cmd.image_url = Some("https://example.com/aspirin.png".to_string());
        let err = cmd.validate().unwrap_err();
        assert!(err.to_string().contains("Invalid S3 image URL"));
    }

    #[test]
    fn test_errors_are_collected_not_short_circuited() {
        let cmd = CreateProductCommand {
            name: String::new(),
            description: None,
            price: 0.0,
            stock: -5,
            requires_prescription: false,
            image_url: None,
        };
        let message = cmd.validate().unwrap_err().to_string();
        assert!(message.contains("name"));
        assert!(message.contains("description"));
        assert!(message.contains("price"));
        assert!(message.contains("stock"));
    }
}
