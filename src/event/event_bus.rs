// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Event bus for broadcasting temperature events.

use tokio::sync::broadcast;

use crate::error::ValueError;

use super::TemperatureEvent;

/// Default channel capacity for the event bus.
const DEFAULT_CHANNEL_CAPACITY: usize = 256;

/// Event bus for broadcasting temperature events to push subscribers.
///
/// Publishing never blocks, which keeps the ingestion path free of I/O
/// waits. Each subscriber gets its own copy of each event.
///
/// # Capacity
///
/// The event bus has a fixed capacity (default 256). If the channel fills
/// up because a subscriber is slow, older events may be dropped for that
/// subscriber (they will receive a `RecvError::Lagged` error).
///
/// # Examples
///
/// ```
/// use chrono::Utc;
/// use zonetemp_lib::event::{EventBus, TemperatureEvent};
///
/// let bus = EventBus::new();
///
/// let _rx = bus.subscribe();
/// let _rx2 = bus.subscribe();
///
/// let delivered = bus.publish_counted(TemperatureEvent::new(Utc::now()));
/// assert_eq!(delivered, 2);
/// ```
#[derive(Debug, Clone)]
pub struct EventBus {
    sender: broadcast::Sender<TemperatureEvent>,
}

impl EventBus {
    /// Creates a new event bus with default capacity.
    #[must_use]
    pub fn new() -> Self {
        let (sender, _) = broadcast::channel(DEFAULT_CHANNEL_CAPACITY);
        Self { sender }
    }

    /// Creates a new event bus with the specified capacity.
    ///
    /// # Arguments
    ///
    /// * `capacity` - Maximum number of events buffered per subscriber
    ///
    /// # Errors
    ///
    /// Returns [`ValueError::ZeroCapacity`] if `capacity` is zero.
    pub fn with_capacity(capacity: usize) -> Result<Self, ValueError> {
        if capacity == 0 {
            return Err(ValueError::ZeroCapacity);
        }
        let (sender, _) = broadcast::channel(capacity);
        Ok(Self { sender })
    }

    /// Subscribes to temperature events.
    ///
    /// Returns a receiver that will receive all events published after
    /// the subscription is created.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<TemperatureEvent> {
        self.sender.subscribe()
    }

    /// Returns the number of active subscribers.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }

    /// Publishes an event to all subscribers.
    ///
    /// If there are no subscribers, the event is silently discarded.
    /// If the channel is full for a slow subscriber, that subscriber
    /// will lose events.
    pub fn publish(&self, event: TemperatureEvent) {
        // Ignore errors (no subscribers or channel closed)
        let _ = self.sender.send(event);
    }

    /// Publishes an event and returns the number of receivers that received it.
    ///
    /// Returns 0 if there are no subscribers.
    #[must_use]
    pub fn publish_counted(&self, event: TemperatureEvent) -> usize {
        self.sender.send(event).unwrap_or(0)
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}
