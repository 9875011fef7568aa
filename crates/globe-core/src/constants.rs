// Shared scene/interaction tuning constants used by the core and the web frontend.

// Picking
pub const PICK_VIEWPORT_RADIUS_FRACTION: f32 = 0.3; // globe radius as a fraction of the short viewport side
pub const PICK_PROJECTION_SCALE: f32 = 0.8; // shrink applied on top of the globe radius
pub const PICK_THRESHOLD_PX: f32 = 10.0; // strict upper bound on pointer-to-marker distance

// Sample data
pub const BIRD_SAMPLE_COUNT: usize = 50;
pub const RADIO_SAMPLE_COUNT: usize = 30;
pub const SAMPLE_LATITUDE_SPAN_DEG: f64 = 160.0; // markers stay within +-80 degrees
pub const SAMPLE_LONGITUDE_SPAN_DEG: f64 = 360.0;
pub const BIRD_MAX_COUNT: u32 = 20;
pub const BIRD_SIGHTING_WINDOW_DAYS: i64 = 30;
pub const RADIO_FREQ_MIN_MHZ: f32 = 88.0;
pub const RADIO_FREQ_SPAN_MHZ: f32 = 20.0;
pub const RADIO_POWER_MIN_KW: u32 = 10;
pub const RADIO_POWER_SPAN_KW: u32 = 50;
pub const DATA_LOAD_DELAY_MS: u32 = 1000;

// Controls
pub const DRAG_RADIANS_PER_PX: f32 = 0.01;
pub const WHEEL_ZOOM_PER_UNIT: f32 = 0.001;
pub const CAMERA_START_Z: f32 = 5.0;
pub const CAMERA_MIN_Z: f32 = 2.0;
pub const CAMERA_MAX_Z: f32 = 10.0;
pub const AUTO_ROTATE_RAD_PER_SEC: f32 = 0.06; // 0.001 rad per frame at 60 fps

// Camera
pub const CAMERA_FOVY_DEG: f32 = 75.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 1000.0;

// Geometry
pub const GLOBE_RADIUS: f32 = 1.0;
pub const ATMOSPHERE_RADIUS: f32 = 1.05;
pub const SPHERE_WIDTH_SEGMENTS: u32 = 64;
pub const SPHERE_HEIGHT_SEGMENTS: u32 = 32;
pub const MARKER_WIDTH_SEGMENTS: u32 = 8;
pub const MARKER_HEIGHT_SEGMENTS: u32 = 6;
pub const BIRD_MARKER_SIZE: f32 = 0.02;
pub const RADIO_MARKER_SIZE: f32 = 0.025;

// Marker pulse: opacity = BASE + AMPLITUDE * sin(t * RATE + x * PHASE)
pub const MARKER_PULSE_BASE: f32 = 0.6;
pub const MARKER_PULSE_AMPLITUDE: f32 = 0.2;
pub const MARKER_PULSE_RATE: f32 = 5.0;
pub const MARKER_PULSE_PHASE_PER_X: f32 = 10.0;

// Texture
pub const EARTH_TEXTURE_WIDTH: u32 = 1024;
pub const EARTH_TEXTURE_HEIGHT: u32 = 512;

// Palette (sRGB)
pub const BIRD_COLOR_RGB: [f32; 3] = [0.298, 0.686, 0.314]; // #4CAF50
pub const RADIO_COLOR_RGB: [f32; 3] = [1.0, 0.341, 0.133]; // #FF5722
pub const BACKGROUND_RGB: [f32; 3] = [0.0, 0.039, 0.059]; // #000a0f
pub const GLOBE_OPACITY: f32 = 0.9;

// Lighting
pub const AMBIENT_LIGHT_RGB: [f32; 3] = [0.251, 0.251, 0.251]; // 0x404040
pub const AMBIENT_LIGHT_INTENSITY: f32 = 0.4;
pub const SUN_DIRECTION: [f32; 3] = [5.0, 3.0, 5.0];
pub const SUN_INTENSITY: f32 = 1.0;
pub const POINT_LIGHT_POSITION: [f32; 3] = [2.0, 2.0, 2.0];
pub const POINT_LIGHT_RGB: [f32; 3] = BIRD_COLOR_RGB; // 0x4CAF50
pub const POINT_LIGHT_INTENSITY: f32 = 0.5;
pub const POINT_LIGHT_RANGE: f32 = 10.0;
pub const GLOBE_SHININESS: f32 = 100.0;

// Panel
pub const PANEL_HIDE_DELAY_MS: i32 = 300;
