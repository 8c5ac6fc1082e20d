use crate::config::GameConfig;
use crate::engine::{Color, Engine, Game, KeyCode};
use crate::geometry::Rect;
use crate::input::{ActionMap, InputState};
use crate::ui::{Canvas, draw_dialogue_box};
use crate::world::{self, FrameInput, RoomLayout, WorldState};

const ROOM_OUTLINE: f32 = 3.0;
const PROMPT_FONT_SIZE: f32 = 20.0;

/// Logical inputs of the room demo.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Action {
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    Interact,
    Quit,
}

/// WASD to move, E to interact, Escape to quit.
pub fn default_bindings() -> ActionMap<Action> {
    ActionMap::new()
        .with(Action::MoveUp, KeyCode::KeyW)
        .with(Action::MoveDown, KeyCode::KeyS)
        .with(Action::MoveLeft, KeyCode::KeyA)
        .with(Action::MoveRight, KeyCode::KeyD)
        .with(Action::Interact, KeyCode::KeyE)
        .with(Action::Quit, KeyCode::Escape)
}

/// The single room: owns the layout, the current world state and the key
/// bindings. Drawing goes through [`Canvas`] so it can be inspected without
/// a window.
pub struct RoomScene {
    config: GameConfig,
    layout: RoomLayout,
    state: WorldState,
    actions: ActionMap<Action>,
}

impl RoomScene {
    pub fn new(config: GameConfig) -> Self {
        let layout = RoomLayout::from_config(&config);
        let state = WorldState::new(&layout);
        Self { config, layout, state, actions: default_bindings() }
    }

    pub fn state(&self) -> &WorldState {
        &self.state
    }

    pub fn layout(&self) -> &RoomLayout {
        &self.layout
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Translate raw keys into the world's per-tick input.
    pub fn frame_input(&self, input: &InputState, dt: f32) -> FrameInput {
        FrameInput {
            up: self.actions.is_held(Action::MoveUp, input),
            down: self.actions.is_held(Action::MoveDown, input),
            left: self.actions.is_held(Action::MoveLeft, input),
            right: self.actions.is_held(Action::MoveRight, input),
            interact: self.actions.is_pressed(Action::Interact, input),
            dt,
        }
    }

    pub fn wants_quit(&self, input: &InputState) -> bool {
        self.actions.is_pressed(Action::Quit, input)
    }

    /// Run one world tick and log what changed.
    pub fn advance(&mut self, input: &FrameInput) -> &WorldState {
        let prev = self.state;
        let next = world::update(prev, &self.layout, self.config.player.speed, input);

        if next.is_chatting != prev.is_chatting {
            log::debug!("dialogue {}", if next.is_chatting { "opened" } else { "closed" });
        }
        if next.has_gun && !prev.has_gun {
            log::debug!("picked up the gun");
        }
        if next.exited && !prev.exited {
            log::info!("player left the room");
        }

        self.state = next;
        &self.state
    }

    /// Draw the room, back to front.
    pub fn draw<C: Canvas + ?Sized>(&self, canvas: &mut C) {
        let layout = &self.layout;
        let state = &self.state;
        let (screen_w, screen_h) = (self.config.window.width, self.config.window.height);

        canvas.stroke_rect(layout.room, ROOM_OUTLINE, Color::RAYWHITE);
        canvas.fill_rect(layout.door, Color::DARK_BROWN);

        // Actors snap to whole pixels.
        let player = layout.player_rect(state.player);
        canvas.fill_rect(
            Rect::new(player.x.trunc(), player.y.trunc(), player.w, player.h),
            Color::RAYWHITE,
        );
        canvas.fill_rect(layout.npc_body(), Color::RAYWHITE);

        canvas.fill_rect(layout.table, Color::BROWN);
        if !state.has_gun {
            canvas.fill_rect(layout.gun, Color::GRAY);
        }

        if state.can_interact() {
            canvas.draw_text(
                &self.config.prompt,
                (screen_w / 2) as f32 - 60.0,
                screen_h as f32 - 40.0,
                PROMPT_FONT_SIZE,
                Color::RAYWHITE,
            );
        }

        if state.is_chatting {
            draw_dialogue_box(
                canvas,
                &self.config.npc.dialogue,
                screen_w as f32,
                screen_h as f32,
                &self.config.dialogue,
            );
        }
    }
}

impl Game for RoomScene {
    fn on_enter(&mut self, engine: &mut Engine) {
        engine.set_clear_color(Color::BLACK);
        log::info!(
            "room {:?}, npc at ({}, {}), door {:?}",
            self.layout.room, self.layout.npc.x, self.layout.npc.y, self.layout.door
        );
    }

    fn update(&mut self, engine: &mut Engine) {
        if self.wants_quit(&engine.input) {
            engine.request_quit();
            return;
        }

        let input = self.frame_input(&engine.input, engine.dt());
        if self.advance(&input).exited {
            engine.request_quit();
        }
    }

    fn render(&mut self, engine: &mut Engine) {
        self.draw(&mut engine.draw);
    }
}
