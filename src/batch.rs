//! Sequential per-item execution.
//!
//! Items are processed one at a time in input order; each item's HTTP call
//! is awaited before the next begins. There is no shared mutable state
//! across items — every item compiles an independent request descriptor.
//! Per-item failures either abort the batch (default) or, with failure
//! tolerance enabled, are captured into the output stream so the batch
//! continues.

use crate::params::{extract_request, ParameterSource};
use crate::transport::Transport;
use crate::{Error, Result};
use serde::Serialize;
use serde_json::Value;
use tracing::warn;

/// Output for a single input item, tagged with its source index.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemOutput {
    /// Raw response JSON, or an error payload when the failure was tolerated.
    pub json: Value,
    /// Index of the input item this output was produced from.
    pub paired_item: usize,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BatchOptions {
    /// Capture per-item errors into the output stream instead of aborting.
    pub continue_on_fail: bool,
}

pub struct BatchExecutor {
    options: BatchOptions,
}

impl BatchExecutor {
    pub fn new() -> Self {
        Self {
            options: BatchOptions::default(),
        }
    }

    pub fn with_options(options: BatchOptions) -> Self {
        Self { options }
    }

    pub fn continue_on_fail(mut self, enable: bool) -> Self {
        self.options.continue_on_fail = enable;
        self
    }

    /// Process `item_count` items in input order, one awaited call at a
    /// time. Without failure tolerance, the first error aborts the
    /// remaining items and is surfaced with the item index and operation
    /// attached.
    pub async fn execute(
        &self,
        item_count: usize,
        source: &dyn ParameterSource,
        transport: &dyn Transport,
    ) -> Result<Vec<ItemOutput>> {
        let mut outputs = Vec::with_capacity(item_count);

        for item_index in 0..item_count {
            match self.execute_item(source, transport, item_index).await {
                Ok(json) => outputs.push(ItemOutput {
                    json,
                    paired_item: item_index,
                }),
                Err(err) => {
                    if self.options.continue_on_fail {
                        warn!(item = item_index, error = %err, "item failed, continuing");
                        outputs.push(ItemOutput {
                            json: err.into_payload(),
                            paired_item: item_index,
                        });
                        continue;
                    }
                    let operation = source
                        .get_string("operation", item_index)
                        .unwrap_or_default();
                    return Err(Error::Item {
                        item_index,
                        operation,
                        source: Box::new(err),
                    });
                }
            }
        }

        Ok(outputs)
    }

    async fn execute_item(
        &self,
        source: &dyn ParameterSource,
        transport: &dyn Transport,
        item_index: usize,
    ) -> Result<Value> {
        let request = extract_request(source, item_index)?;
        let descriptor = request.build();
        transport.execute(&descriptor).await
    }
}

impl Default for BatchExecutor {
    fn default() -> Self {
        Self::new()
    }
}
