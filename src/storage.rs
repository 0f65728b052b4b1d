// src/storage.rs

use std::collections::HashMap;

/// Clave fija bajo la que se guarda el progreso
pub const PROGRESS_KEY: &str = "kodesiap-progress";

/// Ranura clave/valor duradera donde vive el snapshot del progreso.
///
/// Las escrituras son de mejor esfuerzo: no devuelven error y la última gana.
pub trait ProgressSlot {
    fn read(&self) -> Option<String>;
    fn write(&mut self, blob: &str);
}

/// Ranura en memoria (tests y uso sin interfaz)
#[derive(Debug, Default, Clone)]
pub struct MemorySlot {
    values: HashMap<String, String>,
    writes: usize,
}

impl MemorySlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_blob(blob: impl Into<String>) -> Self {
        let mut slot = Self::default();
        slot.values.insert(PROGRESS_KEY.to_string(), blob.into());
        slot
    }

    /// Cuántas veces se ha escrito (útil para comprobar el write-through)
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl ProgressSlot for MemorySlot {
    fn read(&self) -> Option<String> {
        self.values.get(PROGRESS_KEY).cloned()
    }

    fn write(&mut self, blob: &str) {
        self.values.insert(PROGRESS_KEY.to_string(), blob.to_string());
        self.writes += 1;
    }
}

/// Adaptador sobre el almacenamiento de eframe (fichero en nativo,
/// localStorage en web).
pub struct EframeSlot<'a>(pub &'a mut dyn eframe::Storage);

impl ProgressSlot for EframeSlot<'_> {
    fn read(&self) -> Option<String> {
        self.0.get_string(PROGRESS_KEY)
    }

    fn write(&mut self, blob: &str) {
        self.0.set_string(PROGRESS_KEY, blob.to_string());
        self.0.flush();
    }
}

/// Lectura al arrancar: en la creación eframe solo presta `&dyn Storage`
pub struct EframeReader<'a>(pub Option<&'a dyn eframe::Storage>);

impl ProgressSlot for EframeReader<'_> {
    fn read(&self) -> Option<String> {
        self.0.and_then(|s| s.get_string(PROGRESS_KEY))
    }

    fn write(&mut self, _blob: &str) {
        log::warn!("Escritura ignorada: almacenamiento de solo lectura");
    }
}

/// Sin almacenamiento disponible: se descarta la escritura
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSlot;

impl ProgressSlot for NullSlot {
    fn read(&self) -> Option<String> {
        None
    }

    fn write(&mut self, _blob: &str) {
        log::debug!("Sin almacenamiento: progreso no persistido");
    }
}
