// Shared scene and interaction tuning constants.

// Camera: at this distance one world unit covers one CSS pixel on the z = 0 plane
pub const CAMERA_Z: f32 = 600.0;
pub const CAMERA_NEAR: f32 = 100.0;
pub const CAMERA_FAR: f32 = 2000.0;

// Rendering
pub const MAX_PIXEL_RATIO: f64 = 2.0; // render targets never exceed 2x backing density
pub const PLANE_SEGMENTS: u32 = 10; // subdivisions per plane edge
pub const CLEAR_COLOR: [f64; 4] = [1.0, 1.0, 1.0, 1.0];

// Hover transition
pub const HOVER_DURATION_SEC: f32 = 1.0;
pub const POINTER_UV_DEFAULT: [f32; 2] = [0.5, 0.5];

// Post-process wipe
pub const NOISE_SCALE: f32 = 10.0; // uv -> noise domain
pub const AREA_EDGE_START: f32 = 1.0; // vertical band, top of screen
pub const AREA_EDGE_END: f32 = 0.8;
pub const MASK_EDGE_LOW: f32 = 0.5;
pub const MASK_EDGE_HIGH: f32 = 0.51;
pub const SHEAR_STRENGTH: f32 = 0.1;

// Smooth scroll
pub const SCROLL_EASE: f32 = 0.1; // fraction of the remaining distance covered per frame
pub const SCROLL_SNAP_EPSILON: f32 = 0.01; // px
pub const SCROLL_SPEED_SMOOTHING: f32 = 0.2;
pub const SCROLL_VELOCITY_NORM: f32 = 100.0; // px per frame mapped to velocity 1.0
pub const SCROLL_VELOCITY_MAX: f32 = 4.0;
