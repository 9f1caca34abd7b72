//! Outbound navigation feed: the app pushes updates, host code outside the
//! ECS drains them from the receiver.

use bevy::prelude::Resource;
use crossbeam_channel::{Receiver, Sender};

use crate::faces::FaceId;
use crate::navigation::SectionId;

/// One navigation notification.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavUpdate {
    /// A pointer click resolved to a logical face. At most one per click.
    FaceClicked(FaceId),
    /// The state machine applied a transition to this section.
    SectionChanged(SectionId),
}

/// Sender half, living inside the app as a resource.
#[derive(Resource)]
pub struct NavigationSink(Sender<NavUpdate>);

impl NavigationSink {
    /// A dropped or lagging receiver is not the app's problem; the update
    /// is discarded.
    pub fn send(&self, update: NavUpdate) {
        let _ = self.0.try_send(update);
    }
}

/// Creates the sink resource and the receiver the host drains.
pub fn init_navigation_channel() -> (NavigationSink, Receiver<NavUpdate>) {
    let (tx, rx) = crossbeam_channel::bounded(64);
    (NavigationSink(tx), rx)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn updates_arrive_in_send_order() {
        let (sink, rx) = init_navigation_channel();
        sink.send(NavUpdate::FaceClicked(FaceId::Right));
        sink.send(NavUpdate::SectionChanged(SectionId::Projects));

        assert_eq!(rx.try_recv(), Ok(NavUpdate::FaceClicked(FaceId::Right)));
        assert_eq!(
            rx.try_recv(),
            Ok(NavUpdate::SectionChanged(SectionId::Projects))
        );
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn send_survives_a_dropped_receiver() {
        let (sink, rx) = init_navigation_channel();
        drop(rx);
        sink.send(NavUpdate::SectionChanged(SectionId::Home));
    }
}
