//! Pointer drag sessions over the crop overlay.
//!
//! A session is opened by a pointer-down on one of the four corner handles
//! or on the body of the crop box, and closed by the matching pointer-up.
//! Only one session can be open at a time.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::geometry::{Point, Rect, Scale};

/// Which part of the crop box a drag started on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HandleId {
    /// Top-left corner.
    Nw,
    /// Top-right corner.
    Ne,
    /// Bottom-left corner.
    Sw,
    /// Bottom-right corner.
    Se,
    /// The body of the crop box.
    Move,
}

/// The edge a corner handle drags along one axis.
///
/// `Low` is the west or north edge (moving it changes the origin),
/// `High` is the east or south edge (moving it only changes the size).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Low,
    High,
}

impl HandleId {
    pub const ALL: [HandleId; 5] = [
        HandleId::Nw,
        HandleId::Ne,
        HandleId::Sw,
        HandleId::Se,
        HandleId::Move,
    ];

    /// Horizontal edge driven by this handle, `None` for `Move`.
    pub const fn horizontal(self) -> Option<Edge> {
        match self {
            HandleId::Nw | HandleId::Sw => Some(Edge::Low),
            HandleId::Ne | HandleId::Se => Some(Edge::High),
            HandleId::Move => None,
        }
    }

    /// Vertical edge driven by this handle, `None` for `Move`.
    pub const fn vertical(self) -> Option<Edge> {
        match self {
            HandleId::Nw | HandleId::Ne => Some(Edge::Low),
            HandleId::Sw | HandleId::Se => Some(Edge::High),
            HandleId::Move => None,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            HandleId::Nw => "nw",
            HandleId::Ne => "ne",
            HandleId::Sw => "sw",
            HandleId::Se => "se",
            HandleId::Move => "move",
        }
    }
}

impl fmt::Display for HandleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A handle name that is not one of `nw`, `ne`, `sw`, `se`, `move`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown crop handle: {0}")]
pub struct UnknownHandle(pub String);

impl FromStr for HandleId {
    type Err = UnknownHandle;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "nw" => Ok(HandleId::Nw),
            "ne" => Ok(HandleId::Ne),
            "sw" => Ok(HandleId::Sw),
            "se" => Ok(HandleId::Se),
            "move" => Ok(HandleId::Move),
            _ => Err(UnknownHandle(s.to_string())),
        }
    }
}

/// Snapshot taken at pointer-down.
///
/// `origin_pointer` is in display space, `rect_at_origin` in buffer space.
/// `scale` is the display/buffer ratio at the moment the drag started and
/// is used for every delta of this session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    pub handle: HandleId,
    pub origin_pointer: Point,
    pub rect_at_origin: Rect,
    pub scale: Scale,
}

impl DragSession {
    pub fn new(handle: HandleId, origin_pointer: Point, rect_at_origin: Rect, scale: Scale) -> Self {
        Self {
            handle,
            origin_pointer,
            rect_at_origin,
            scale,
        }
    }
}

/// `Idle -> Active -> Idle` state machine holding at most one session.
#[derive(Debug, Clone, Default)]
pub struct DragTracker {
    active: Option<DragSession>,
}

impl DragTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a session.
    ///
    /// Returns `false` and leaves the current session untouched if one is
    /// already active.
    pub fn begin(&mut self, session: DragSession) -> bool {
        if let Some(current) = &self.active {
            debug!(active = %current.handle, ignored = %session.handle, "drag already active");
            return false;
        }
        debug!(
            handle = %session.handle,
            x = session.origin_pointer.x,
            y = session.origin_pointer.y,
            "drag started"
        );
        self.active = Some(session);
        true
    }

    pub fn session(&self) -> Option<&DragSession> {
        self.active.as_ref()
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// Close the active session, returning it.
    pub fn end(&mut self) -> Option<DragSession> {
        let ended = self.active.take();
        if let Some(session) = &ended {
            debug!(handle = %session.handle, "drag ended");
        }
        ended
    }
}
