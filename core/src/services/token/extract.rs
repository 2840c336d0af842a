//! Partitioning of scanned records into the bearer/refresh pair

use crate::domain::entities::token::{TokenEntity, TokenPair, TokenType};

/// Keep the last record of each type in the order given
///
/// The order is whatever the store scanned in, so "last" is not necessarily
/// the most recently created record. A type with no records keeps its zero
/// value.
pub fn extract_tokens<I>(records: I) -> TokenPair
where
    I: IntoIterator<Item = TokenEntity>,
{
    records
        .into_iter()
        .fold(TokenPair::empty(), |mut pair, record| {
            match record.token_type {
                TokenType::Bearer => pair.bearer = record,
                TokenType::Refresh => pair.refresh = record,
            }
            pair
        })
}
