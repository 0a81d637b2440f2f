/// Screen-space effect applied after the scene pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum PostEffect {
    #[default]
    None,
    Outline,
    Scanline,
    Pixelation,
    DotScreen,
}

impl PostEffect {
    pub const ALL: [PostEffect; 5] = [
        PostEffect::None,
        PostEffect::Outline,
        PostEffect::Scanline,
        PostEffect::Pixelation,
        PostEffect::DotScreen,
    ];

    pub fn next(self) -> Self {
        match self {
            PostEffect::None => PostEffect::Outline,
            PostEffect::Outline => PostEffect::Scanline,
            PostEffect::Scanline => PostEffect::Pixelation,
            PostEffect::Pixelation => PostEffect::DotScreen,
            PostEffect::DotScreen => PostEffect::None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            PostEffect::None => "none",
            PostEffect::Outline => "outline",
            PostEffect::Scanline => "scanline",
            PostEffect::Pixelation => "pixelation",
            PostEffect::DotScreen => "dot screen",
        }
    }

    /// Mode id read by `fs_composite` in post.wgsl.
    pub fn shader_mode(self) -> u32 {
        match self {
            PostEffect::None => 0,
            PostEffect::Outline => 1,
            PostEffect::Scanline => 2,
            PostEffect::Pixelation => 3,
            PostEffect::DotScreen => 4,
        }
    }

    /// Effect strength: scanline period (px), pixel cell size (px) or dot scale.
    pub fn param(self) -> f32 {
        match self {
            PostEffect::None => 0.0,
            PostEffect::Outline => 1.0,
            PostEffect::Scanline => 2.0,
            PostEffect::Pixelation => 10.0,
            PostEffect::DotScreen => 2.0,
        }
    }
}
