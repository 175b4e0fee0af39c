// Copyright 2025 the Formgrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Control state flags.

bitflags::bitflags! {
    /// Visibility and interaction state of a rendered control.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct ControlFlags: u8 {
        /// Control is rendered.
        const VISIBLE  = 0b0000_0001;
        /// Control accepts input.
        const ENABLED  = 0b0000_0010;
        /// Value is required by the schema.
        const REQUIRED = 0b0000_0100;
    }
}

impl Default for ControlFlags {
    fn default() -> Self {
        Self::VISIBLE | Self::ENABLED
    }
}

impl ControlFlags {
    /// True if [`ControlFlags::VISIBLE`] is set.
    pub const fn is_visible(self) -> bool {
        self.contains(Self::VISIBLE)
    }

    /// True if [`ControlFlags::ENABLED`] is set.
    pub const fn is_enabled(self) -> bool {
        self.contains(Self::ENABLED)
    }

    /// True if [`ControlFlags::REQUIRED`] is set.
    pub const fn is_required(self) -> bool {
        self.contains(Self::REQUIRED)
    }
}
