//! Rendering engine boundary
//!
//! Anything that can take a chart configuration, redo its layout on request
//! and report clicks and hovers can back a chart widget.

use crate::charts::ChartConfiguration;

/// A data point under the pointer or selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActiveElement {
    pub dataset_index: usize,
    pub index: usize,
}

/// Raw interaction payload, forwarded to the widget's parent unchanged
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ChartInteraction {
    pub active: Vec<ActiveElement>,
}

impl ChartInteraction {
    pub fn on(dataset_index: usize, index: usize) -> Self {
        Self {
            active: vec![ActiveElement {
                dataset_index,
                index,
            }],
        }
    }

    pub fn has_active(&self) -> bool {
        !self.active.is_empty()
    }
}

/// Interaction reported by an engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineNotification {
    Click(ChartInteraction),
    Hover(ChartInteraction),
}

/// Contract between a chart widget and whatever draws it
pub trait RenderEngine {
    /// Replace the chart type, data and options
    fn set_chart(&mut self, config: &ChartConfiguration);

    /// Draw nothing
    fn clear(&mut self);

    /// Recompute layout for the current container size
    fn resize(&mut self);

    /// Interactions observed since the last call
    fn poll_interactions(&mut self) -> Vec<EngineNotification> {
        Vec::new()
    }
}

impl<E: RenderEngine + ?Sized> RenderEngine for Box<E> {
    fn set_chart(&mut self, config: &ChartConfiguration) {
        (**self).set_chart(config)
    }

    fn clear(&mut self) {
        (**self).clear()
    }

    fn resize(&mut self) {
        (**self).resize()
    }

    fn poll_interactions(&mut self) -> Vec<EngineNotification> {
        (**self).poll_interactions()
    }
}
