use std::collections::{HashMap, HashSet};
use std::hash::Hash;
pub use winit::keyboard::KeyCode;

/// Raw keyboard state for a single frame.
#[derive(Debug, Default)]
pub struct InputState {
    pub keys_held: HashSet<KeyCode>,
    pub keys_pressed: HashSet<KeyCode>,
    pub keys_released: HashSet<KeyCode>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key-down event. Auto-repeat of an already held key does not
    /// count as a new press.
    pub fn press(&mut self, key: KeyCode) {
        if self.keys_held.insert(key) {
            self.keys_pressed.insert(key);
        }
    }

    pub fn release(&mut self, key: KeyCode) {
        self.keys_held.remove(&key);
        self.keys_released.insert(key);
    }

    /// Forget edge-triggered state at the end of a frame. Held keys persist.
    pub fn clear_frame_state(&mut self) {
        self.keys_pressed.clear();
        self.keys_released.clear();
    }

    pub fn is_key_held(&self, key: KeyCode) -> bool { self.keys_held.contains(&key) }
    pub fn is_key_pressed(&self, key: KeyCode) -> bool { self.keys_pressed.contains(&key) }
    pub fn is_key_released(&self, key: KeyCode) -> bool { self.keys_released.contains(&key) }
}

/// Maps logical actions to one or more physical keys.
#[derive(Debug, Clone)]
pub struct ActionMap<A: Hash + Eq + Copy> {
    bindings: HashMap<A, Vec<KeyCode>>,
}

impl<A: Hash + Eq + Copy> ActionMap<A> {
    pub fn new() -> Self {
        Self { bindings: HashMap::new() }
    }

    pub fn bind(&mut self, action: A, key: KeyCode) {
        self.bindings.entry(action).or_default().push(key);
    }

    /// Returns true if any key bound to `action` is currently held.
    pub fn is_held(&self, action: A, input: &InputState) -> bool {
        self.bindings
            .get(&action)
            .is_some_and(|keys| keys.iter().any(|k| input.is_key_held(*k)))
    }

    /// Returns true if any key bound to `action` went down this frame.
    pub fn is_pressed(&self, action: A, input: &InputState) -> bool {
        self.bindings
            .get(&action)
            .is_some_and(|keys| keys.iter().any(|k| input.is_key_pressed(*k)))
    }
}

impl<A: Hash + Eq + Copy> Default for ActionMap<A> {
    fn default() -> Self { Self::new() }
}

// ── Movement ────────────────────────────────────────────────────────────────

/// The four directional actions the player can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    Up,
    Down,
    Left,
    Right,
}

impl ActionMap<Move> {
    /// Arrow keys and WASD, either key of a pair moves in that direction.
    pub fn movement() -> Self {
        let mut map = Self::new();
        map.bind(Move::Up, KeyCode::ArrowUp);
        map.bind(Move::Up, KeyCode::KeyW);
        map.bind(Move::Down, KeyCode::ArrowDown);
        map.bind(Move::Down, KeyCode::KeyS);
        map.bind(Move::Left, KeyCode::ArrowLeft);
        map.bind(Move::Left, KeyCode::KeyA);
        map.bind(Move::Right, KeyCode::ArrowRight);
        map.bind(Move::Right, KeyCode::KeyD);
        map
    }

    /// Per-axis displacement for one frame at `speed` pixels per frame.
    ///
    /// Each held direction contributes independently, so opposite directions
    /// cancel and perpendicular ones combine into a diagonal.
    pub fn displacement(&self, input: &InputState, speed: i32) -> (i32, i32) {
        let mut dx = 0;
        let mut dy = 0;
        if self.is_held(Move::Up, input) {
            dy -= speed;
        }
        if self.is_held(Move::Down, input) {
            dy += speed;
        }
        if self.is_held(Move::Left, input) {
            dx -= speed;
        }
        if self.is_held(Move::Right, input) {
            dx += speed;
        }
        (dx, dy)
    }
}
