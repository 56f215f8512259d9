/// Game tuning parameters for Pong
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Screen (pixels, origin top-left, y grows downward)
    pub const SCREEN_WIDTH: f32 = 800.0;
    pub const SCREEN_HEIGHT: f32 = 600.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 15.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    pub const PADDLE_OFFSET: f32 = 50.0; // distance from the side edge
    pub const PADDLE_SPEED: f32 = 400.0; // pixels per second

    // Ball
    pub const BALL_RADIUS: f32 = 10.0;
    pub const BALL_SPEED: f32 = 400.0; // pixels per second
    pub const MAX_BOUNCE_ANGLE: f32 = std::f32::consts::FRAC_PI_4; // 45°

    // Frame driver
    pub const TARGET_FPS: u32 = 60;

    // Physics
    pub const FIXED_DT: f32 = 1.0 / 60.0;
    pub const MAX_DT: f32 = 0.1; // Clamp to prevent large jumps
}
