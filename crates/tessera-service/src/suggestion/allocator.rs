//! Sequential budget allocation with forward carryover.
//!
//! Each provider is offered an equal share of whatever budget is left for
//! the providers that have not run yet. A provider returning fewer items
//! than its share leaves the surplus to the providers after it, so the
//! order of the list decides who benefits. Providers must run one after
//! another: every limit depends on what the previous ones consumed.

use async_trait::async_trait;
use tracing::debug;

use tessera_core::result::AppResult;
use tessera_entity::suggestion::Suggestions;

/// Something that counts against a budget.
pub trait Allotment {
    /// Number of budget units consumed.
    fn allotted(&self) -> usize;
}

impl<T> Allotment for Vec<T> {
    fn allotted(&self) -> usize {
        self.len()
    }
}

impl Allotment for Suggestions {
    fn allotted(&self) -> usize {
        self.len()
    }
}

/// A participant in a budgeted fan-out.
#[async_trait]
pub trait QuotaProvider: Send + Sync {
    /// What one invocation yields.
    type Output: Allotment + Send;

    /// Name used in logs.
    fn name(&self) -> &'static str;

    /// Produce at most `limit` units.
    async fn fetch(&self, limit: usize) -> AppResult<Self::Output>;
}

/// Splits a fixed budget across an ordered provider list.
#[derive(Debug, Clone, Copy)]
pub struct QuotaAllocator {
    /// Total units available to all providers together.
    total: usize,
}

impl QuotaAllocator {
    /// Creates an allocator for `total` units.
    pub fn new(total: usize) -> Self {
        Self { total }
    }

    /// Runs every provider in order and returns their outputs in the same order.
    ///
    /// The first storage error aborts the run and is returned as-is.
    pub async fn allocate<T>(&self, providers: &[&dyn QuotaProvider<Output = T>]) -> AppResult<Vec<T>>
    where
        T: Allotment + Send,
    {
        let mut remaining = self.total;
        let mut outputs = Vec::with_capacity(providers.len());

        for (index, provider) in providers.iter().enumerate() {
            let share = remaining / (providers.len() - index);
            let output = provider.fetch(share).await?;
            let used = output.allotted();
            remaining = remaining.saturating_sub(used);

            debug!(
                provider = provider.name(),
                share,
                used,
                remaining,
                "Quota provider finished"
            );
            outputs.push(output);
        }

        Ok(outputs)
    }
}
