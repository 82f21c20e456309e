// src/common/money.rs

// Somas de dinheiro nunca entram em pânico: estouro vira erro interno.

use anyhow::anyhow;
use rust_decimal::Decimal;

use crate::common::error::AppError;

/// Teto de qualquer valor digitado no painel: 99.999.999,99.
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(1_410_065_407, 2, 0, false, 2);

pub fn checked_add(total: Decimal, amount: Decimal) -> Result<Decimal, AppError> {
    total.checked_add(amount).ok_or_else(|| {
        AppError::InternalServerError(anyhow!("soma monetária estourou: {total} + {amount}"))
    })
}

pub fn checked_sum<I>(amounts: I) -> Result<Decimal, AppError>
where
    I: IntoIterator<Item = Decimal>,
{
    amounts.into_iter().try_fold(Decimal::ZERO, checked_add)
}
