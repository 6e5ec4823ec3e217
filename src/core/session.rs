use crate::core::presenter::{self, OutputFormat};
use crate::core::{OrderSource, Result};
use crate::utils::error::LookupError;
use std::io::{BufRead, Write};

pub const PROMPT: &str = "Enter order ID: ";
pub const FAILURE_MESSAGE: &str = "Could not retrieve order information. Please try again.";

/// Where a single lookup ended up. There is no way back to the prompt.
#[derive(Debug)]
pub enum LookupOutcome {
    Printed { order_uid: String },
    NotRetrieved(LookupError),
}

/// One prompt, one fetch, one dump.
pub struct OrderLookup<S: OrderSource> {
    source: S,
    format: OutputFormat,
}

impl<S: OrderSource> OrderLookup<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            format: OutputFormat::default(),
        }
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Prompts on `out`, reads the order ID from `input` and looks it up.
    pub async fn run<R: BufRead, W: Write>(
        &self,
        input: &mut R,
        out: &mut W,
    ) -> Result<LookupOutcome> {
        write!(out, "{}", PROMPT)?;
        out.flush()?;

        let order_id = read_order_id(input)?;
        self.lookup(&order_id, out).await
    }

    pub async fn lookup<W: Write>(&self, order_id: &str, out: &mut W) -> Result<LookupOutcome> {
        tracing::info!("Looking up order {}", order_id);

        match self.source.fetch(order_id).await {
            Ok(order) => {
                presenter::present(&order, self.format, out)?;
                tracing::info!("Printed order {}", order.order_uid);
                Ok(LookupOutcome::Printed {
                    order_uid: order.order_uid,
                })
            }
            Err(e) => {
                tracing::warn!("Order {} not retrieved: {}", order_id, e);
                writeln!(out, "{}", e.diagnostic())?;
                writeln!(out, "{}", FAILURE_MESSAGE)?;
                Ok(LookupOutcome::NotRetrieved(e))
            }
        }
    }
}

/// Reads one line and drops its line terminator. Anything else, surrounding
/// whitespace included, is part of the ID.
pub fn read_order_id<R: BufRead>(input: &mut R) -> Result<String> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(LookupError::NoInput);
    }

    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    Ok(line)
}
