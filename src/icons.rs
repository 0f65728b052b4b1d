// src/icons.rs

/// Glifos conocidos por la interfaz. Un nombre desconocido cae en `BookOpen`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Glyph {
    Hammer,
    Cpu,
    ListOrdered,
    Search,
    Share2,
    Network,
    Layers,
    MapPin,
    #[default]
    BookOpen,
}

impl Glyph {
    pub fn from_name(name: &str) -> Self {
        match name {
            "Hammer" => Glyph::Hammer,
            "Cpu" => Glyph::Cpu,
            "ListOrdered" => Glyph::ListOrdered,
            "Search" => Glyph::Search,
            "Share2" => Glyph::Share2,
            "Network" => Glyph::Network,
            "Layers" => Glyph::Layers,
            "MapPin" => Glyph::MapPin,
            "BookOpen" => Glyph::BookOpen,
            other => {
                log::debug!("Icono desconocido '{other}', usando BookOpen");
                Glyph::BookOpen
            }
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Glyph::Hammer => "🔨",
            Glyph::Cpu => "💻",
            Glyph::ListOrdered => "📶",
            Glyph::Search => "🔍",
            Glyph::Share2 => "🌲",
            Glyph::Network => "🌐",
            Glyph::Layers => "📚",
            Glyph::MapPin => "📍",
            Glyph::BookOpen => "📖",
        }
    }
}
