//! Attribute-map encoding of token records
//!
//! Attribute names match the records already present in the table so the
//! legacy writer and this crate can share it.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;

use at_core::domain::entities::token::{TokenEntity, TokenType};
use at_core::errors::TokenError;

pub const ATTR_PROVIDER: &str = "Provider";
pub const ATTR_TOKEN: &str = "Token";
pub const ATTR_TOKEN_TYPE: &str = "TokenType";
pub const ATTR_EXPIRES_IN: &str = "ExpiresIn";
pub const ATTR_CREATED_AT: &str = "CreatedAt";

/// Convert a TokenEntity into a DynamoDB item
pub fn entity_to_item(entity: &TokenEntity) -> HashMap<String, AttributeValue> {
    HashMap::from([
        (ATTR_PROVIDER.to_string(), AttributeValue::S(entity.provider.clone())),
        (ATTR_TOKEN.to_string(), AttributeValue::S(entity.token.clone())),
        (
            ATTR_TOKEN_TYPE.to_string(),
            AttributeValue::S(entity.token_type.to_string()),
        ),
        (
            ATTR_EXPIRES_IN.to_string(),
            AttributeValue::N(entity.expires_in.to_string()),
        ),
        (
            ATTR_CREATED_AT.to_string(),
            AttributeValue::N(entity.created_at.to_string()),
        ),
    ])
}

/// Convert a DynamoDB item into a TokenEntity
///
/// # Returns
/// * `Ok(Some(TokenEntity))` - Item decoded
/// * `Ok(None)` - Well-formed item whose token type is neither bearer nor refresh
/// * `Err(TokenError::Deserialization)` - Missing attribute, wrong attribute kind or bad number
pub fn item_to_entity(
    item: &HashMap<String, AttributeValue>,
) -> Result<Option<TokenEntity>, TokenError> {
    let token_type = match string_attr(item, ATTR_TOKEN_TYPE)?.parse::<TokenType>() {
        Ok(token_type) => token_type,
        Err(TokenError::UnknownTokenType(_)) => return Ok(None),
        Err(e) => return Err(e),
    };

    Ok(Some(TokenEntity {
        provider: string_attr(item, ATTR_PROVIDER)?,
        token: string_attr(item, ATTR_TOKEN)?,
        token_type,
        expires_in: number_attr(item, ATTR_EXPIRES_IN)?,
        created_at: number_attr(item, ATTR_CREATED_AT)?,
    }))
}

fn attr<'a>(
    item: &'a HashMap<String, AttributeValue>,
    name: &str,
) -> Result<&'a AttributeValue, TokenError> {
    item.get(name)
        .ok_or_else(|| TokenError::deserialization(name, "attribute missing"))
}

fn string_attr(item: &HashMap<String, AttributeValue>, name: &str) -> Result<String, TokenError> {
    attr(item, name)?
        .as_s()
        .cloned()
        .map_err(|other| TokenError::deserialization(name, format!("expected string, found {:?}", other)))
}

fn number_attr(item: &HashMap<String, AttributeValue>, name: &str) -> Result<i64, TokenError> {
    let raw = attr(item, name)?
        .as_n()
        .map_err(|other| TokenError::deserialization(name, format!("expected number, found {:?}", other)))?;

    raw.parse::<i64>()
        .map_err(|e| TokenError::deserialization(name, format!("invalid number {:?}: {}", raw, e)))
}
