use crate::core::Order;
use crate::domain::model::Item;
use serde::{Deserialize, Serialize};
use std::io::{self, Write};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Labeled, one field per line
    #[default]
    Text,
    /// The decoded order as pretty-printed JSON
    Json,
}

pub fn present<W: Write>(order: &Order, format: OutputFormat, out: &mut W) -> io::Result<()> {
    match format {
        OutputFormat::Text => write_text(order, out),
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, order)?;
            writeln!(out)
        }
    }
}

/// Prints every field of the order in a fixed order. Values are written
/// verbatim; empty strings are kept rather than skipped.
pub fn write_text<W: Write>(order: &Order, out: &mut W) -> io::Result<()> {
    writeln!(out, "Order information:")?;
    writeln!(out, "Order UID: {}", order.order_uid)?;
    writeln!(out, "Track Number: {}", order.track_number)?;
    writeln!(out, "Entry: {}", order.entry)?;

    let delivery = &order.delivery;
    writeln!(out, "Delivery:")?;
    writeln!(out, "  Name: {}", delivery.name)?;
    writeln!(out, "  Phone: {}", delivery.phone)?;
    writeln!(out, "  Zip: {}", delivery.zip)?;
    writeln!(out, "  City: {}", delivery.city)?;
    writeln!(out, "  Address: {}", delivery.address)?;
    writeln!(out, "  Region: {}", delivery.region)?;
    writeln!(out, "  Email: {}", delivery.email)?;

    let payment = &order.payment;
    writeln!(out, "Payment:")?;
    writeln!(out, "  Transaction: {}", payment.transaction)?;
    writeln!(out, "  Currency: {}", payment.currency)?;
    writeln!(out, "  Provider: {}", payment.provider)?;
    writeln!(out, "  Amount: {}", payment.amount)?;
    writeln!(out, "  Payment Date: {}", payment.payment_dt)?;
    writeln!(out, "  Bank: {}", payment.bank)?;
    writeln!(out, "  Delivery Cost: {}", payment.delivery_cost)?;
    writeln!(out, "  Goods Total: {}", payment.goods_total)?;
    writeln!(out, "  Custom Fee: {}", payment.custom_fee)?;

    writeln!(out, "Items:")?;
    for item in &order.items {
        write_item(item, out)?;
    }

    writeln!(out, "Locale: {}", order.locale)?;
    writeln!(out, "Internal Signature: {}", order.internal_signature)?;
    writeln!(out, "Delivery Service: {}", order.delivery_service)?;
    writeln!(out, "Shardkey: {}", order.shardkey)?;
    writeln!(out, "SM ID: {}", order.sm_id)?;
    writeln!(out, "Date Created: {}", order.date_created)?;
    writeln!(out, "OOF Shard: {}", order.oof_shard)
}

fn write_item<W: Write>(item: &Item, out: &mut W) -> io::Result<()> {
    writeln!(out, "  - Chrt ID: {}", item.chrt_id)?;
    writeln!(out, "    Track Number: {}", item.track_number)?;
    writeln!(out, "    Price: {}", item.price)?;
    writeln!(out, "    Rid: {}", item.rid)?;
    writeln!(out, "    Name: {}", item.name)?;
    writeln!(out, "    Sale: {}", item.sale)?;
    writeln!(out, "    Size: {}", item.size)?;
    writeln!(out, "    Total Price: {}", item.total_price)?;
    writeln!(out, "    Nm ID: {}", item.nm_id)?;
    writeln!(out, "    Brand: {}", item.brand)?;
    writeln!(out, "    Status: {}", item.status)
}
