use glam::Vec3;

// Shared tuning constants used by both web and native frontends.

// Navigation
pub const NAV_COOLDOWN_MS: u64 = 1000; // lock window after an accepted transition
pub const SECTION_TRANSITION_MS: u64 = 500; // visual transition used by content markup
pub const DEFAULT_SECTION_COUNT: usize = 7;

// Pointer
pub const POINTER_SMOOTHING: f32 = 0.1; // fraction of the remaining gap closed per frame

// Particle field
pub const WEB_PARTICLE_COUNT: usize = 1000;
pub const NATIVE_PARTICLE_COUNT: usize = 3000;
pub const FIELD_RADIUS: f32 = 4.0; // ball radius used for initial placement
pub const SPRING_GAIN: f32 = 0.002; // pull toward origin per frame
pub const VELOCITY_DAMPING: f32 = 0.98; // velocity multiplier per frame
pub const INITIAL_JITTER: f32 = 0.01; // width of the initial velocity range
pub const ATTRACTION_RADIUS: f32 = 1.5; // world units around the projected pointer
pub const ATTRACTION_GAIN: f32 = 0.0005;
pub const FIELD_SEED: u64 = 42;

// Clock
pub const TIME_SCALE: f32 = 0.6; // shader time advances 0.01 per frame at 60 Hz

// Camera
pub const CAMERA_Z: f32 = 5.0;
pub const CAMERA_FOV_DEG: f32 = 75.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 1000.0;

// Shading
pub const BASE_TONE: Vec3 = Vec3::new(1.0, 1.0, 1.0); // neutral white
pub const ACCENT_TONE: Vec3 = Vec3::new(0.486, 0.227, 0.851); // #7C3AED
pub const ACCENT_STRENGTH: f32 = 0.3; // peak accent mix
pub const CENTER_FALLOFF: f32 = 0.05; // radial distance scale in the shader
pub const BASE_POINT_SIZE: f32 = 2.0;
pub const POINT_SIZE_MULTIPLIER: f32 = 2.0;
pub const SPRITE_INNER: f32 = 0.3; // fully opaque inside this sprite radius
pub const SPRITE_OUTER: f32 = 0.5; // fully transparent past this sprite radius
pub const SPRITE_OPACITY: f32 = 0.8;
