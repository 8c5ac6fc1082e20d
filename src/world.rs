// =============================================================================
// WORLD.RS: Room layout and per-tick world state
//
// The room is fixed at startup from the screen size. Each update tick takes
// the previous `WorldState` by value and returns the next one; nothing here
// touches the window, the GPU or the keyboard directly.
// =============================================================================

use glam::Vec2;

use crate::config::GameConfig;
use crate::geometry::Rect;

/// Margin between the screen edge and the room walls.
const ROOM_INSET: u32 = 50;
/// How far the gun's pickup zone reaches past the gun on each side.
const GUN_REACH: f32 = 30.0;
/// The NPC talk zone extends this many NPC sizes from its centre.
const NPC_REACH: f32 = 1.5;

// ── RoomLayout ────────────────────────────────────────────────────────────────

/// Static geometry of the room. Positions use integer division of the
/// screen size so that odd resolutions land on whole pixels.
#[derive(Clone, Debug, PartialEq)]
pub struct RoomLayout {
    pub room: Rect,
    pub door: Rect,
    pub table: Rect,
    pub gun: Rect,
    /// Centre of the NPC square.
    pub npc: Vec2,
    pub npc_size: u32,
    pub player_start: Vec2,
    pub player_size: u32,
}

impl RoomLayout {
    pub fn new(width: u32, height: u32, player_size: u32, npc_size: u32) -> Self {
        let (w, h) = (width as f32, height as f32);
        let (half_w, half_h) = ((width / 2) as f32, (height / 2) as f32);
        let inset = ROOM_INSET as f32;

        Self {
            room: Rect::new(inset, inset, w - 2.0 * inset, h - 2.0 * inset),
            door: Rect::new(w - 2.0 * inset, half_h - 25.0, 50.0, 50.0),
            table: Rect::new(half_w - 50.0, half_h + 100.0, 100.0, 50.0),
            gun: Rect::new(half_w - 10.0, half_h + 120.0, 20.0, 20.0),
            npc: Vec2::new((width / 3) as f32, half_h),
            npc_size,
            player_start: Vec2::new(half_w, half_h),
            player_size,
        }
    }

    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(
            config.window.width,
            config.window.height,
            config.player.size,
            config.npc.size,
        )
    }

    /// Half the player size, rounded down.
    pub fn player_half(&self) -> f32 {
        (self.player_size / 2) as f32
    }

    pub fn player_rect(&self, player: Vec2) -> Rect {
        let half = self.player_half();
        Rect::new(player.x - half, player.y - half, self.player_size as f32, self.player_size as f32)
    }

    /// The square the NPC occupies; the player cannot walk through it.
    pub fn npc_body(&self) -> Rect {
        let half = (self.npc_size / 2) as f32;
        Rect::new(self.npc.x - half, self.npc.y - half, self.npc_size as f32, self.npc_size as f32)
    }

    /// Standing anywhere overlapping this square counts as "near the NPC".
    pub fn npc_zone(&self) -> Rect {
        let size = self.npc_size as f32;
        Rect::new(
            self.npc.x - size * NPC_REACH,
            self.npc.y - size * NPC_REACH,
            size * NPC_REACH * 2.0,
            size * NPC_REACH * 2.0,
        )
    }

    pub fn gun_zone(&self) -> Rect {
        self.gun.expanded(GUN_REACH)
    }
}

// ── WorldState ────────────────────────────────────────────────────────────────

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct WorldState {
    /// Centre of the player square.
    pub player: Vec2,
    pub is_chatting: bool,
    pub has_gun: bool,
    pub near_npc: bool,
    pub near_gun: bool,
    /// Set once the player walks into the door carrying the gun.
    pub exited: bool,
}

impl WorldState {
    pub fn new(layout: &RoomLayout) -> Self {
        Self {
            player: layout.player_start,
            is_chatting: false,
            has_gun: false,
            near_npc: false,
            near_gun: false,
            exited: false,
        }
    }

    /// Whether the interaction hint should be on screen.
    pub fn can_interact(&self) -> bool {
        self.near_npc || self.near_gun
    }
}

/// What the player asked for during one update tick.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct FrameInput {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    /// Interact was pressed (edge, not held) this tick.
    pub interact: bool,
    /// Seconds since the previous tick.
    pub dt: f32,
}

// ── update ────────────────────────────────────────────────────────────────────

/// Advance the world by one tick.
///
/// Each direction moves independently, and only while the player's leading
/// edge is still inside the room, so the player can overshoot a wall by at
/// most one step. Proximity is judged from the moved position even when the
/// move is then undone by the table or the NPC body.
pub fn update(state: WorldState, layout: &RoomLayout, speed: f32, input: &FrameInput) -> WorldState {
    let mut next = state;
    let old = state.player;
    let half = layout.player_half();
    let step = speed * input.dt;
    let room = layout.room;

    if input.up && next.player.y - half > room.y {
        next.player.y -= step;
    }
    if input.down && next.player.y + half < room.bottom() {
        next.player.y += step;
    }
    if input.left && next.player.x - half > room.x {
        next.player.x -= step;
    }
    if input.right && next.player.x + half < room.right() {
        next.player.x += step;
    }

    let player_rect = layout.player_rect(next.player);

    if player_rect.overlaps(&layout.table) {
        next.player = old;
    }

    next.near_npc = player_rect.overlaps(&layout.npc_zone());
    next.near_gun = player_rect.overlaps(&layout.gun_zone());

    if input.interact && next.near_npc {
        next.is_chatting = !next.is_chatting;
    }

    if input.interact && next.near_gun {
        next.has_gun = true;
    }

    if player_rect.overlaps(&layout.door) && next.has_gun {
        next.exited = true;
    }

    if !next.near_npc {
        next.is_chatting = false;
    }

    if player_rect.overlaps(&layout.npc_body()) {
        next.player = old;
    }

    next
}
