// Copyright 2026 the Gesture Canvas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use bitflags::bitflags;

bitflags! {
    /// Keyboard modifier flags as reported by the host.
    ///
    /// The canvas does not track the keyboard itself; the host forwards the
    /// current set via [`Canvas::set_modifiers`](crate::Canvas::set_modifiers).
    /// Scroll classification treats [`Modifiers::COMMAND`] as the zoom
    /// modifier.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct Modifiers: u8 {
        /// Command (macOS) / logo key.
        const COMMAND = 1 << 0;
        /// Shift key.
        const SHIFT = 1 << 1;
        /// Control key.
        const CONTROL = 1 << 2;
        /// Option / Alt key.
        const OPTION = 1 << 3;
    }
}
