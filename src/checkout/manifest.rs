//! Line-item manifest construction for checkout sessions

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::Serialize;

use crate::config::CheckoutConfig;
use crate::order::OrderItem;

/// Name of the fixed fee line appended to every manifest.
pub const DELIVERY_LINE_NAME: &str = "Delivery Charges";

/// One priced entry submitted to the payment processor.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineItem {
    pub name: String,
    /// Price in the processor's minor currency unit, after conversion
    pub unit_amount: i64,
    pub quantity: u32,
}

/// Convert a major-unit price to the processor's minor-unit amount:
/// `price * 100 * conversion_rate`, rounded to the nearest integer.
pub fn to_minor_units(price: Decimal, conversion_rate: Decimal) -> Result<i64, &'static str> {
    (price * Decimal::ONE_HUNDRED * conversion_rate)
        .round()
        .to_i64()
        .ok_or("Converted amount out of range")
}

/// Build the session manifest: one line per cart item, plus the fixed
/// delivery-charge line appended last.
pub fn build_line_items(
    items: &[OrderItem],
    config: &CheckoutConfig,
) -> Result<Vec<LineItem>, &'static str> {
    let mut lines = Vec::with_capacity(items.len() + 1);

    for item in items {
        lines.push(LineItem {
            name: item.name.clone(),
            unit_amount: to_minor_units(item.price, config.conversion_rate)?,
            quantity: item.quantity,
        });
    }

    lines.push(LineItem {
        name: DELIVERY_LINE_NAME.to_string(),
        unit_amount: to_minor_units(config.delivery_charge, config.conversion_rate)?,
        quantity: 1,
    });

    Ok(lines)
}
