//! Zentrale Konfiguration für bez_path.
//!
//! `GeometryOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::geometry::{LookupTableOptions, QuadratureOptions};

// ── Editieren ──────────────────────────────────────────────────────

/// Abstand neuer Steuerpunkte zum Endpunkt bei Typwechsel/Hinzufügen.
pub const CONTROL_POINT_OFFSET: f32 = 30.0;
/// Standard-Anzahl Teile beim Unterteilen.
pub const SUBDIVISION_SEGMENTS: usize = 2;

// ── Datei ──────────────────────────────────────────────────────────

/// Dateiname der Optionen neben der Binary.
pub const CONFIG_FILE_NAME: &str = "bez_path.toml";

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Geometrie-Optionen.
/// Wird als `bez_path.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeometryOptions {
    // ── Editieren ───────────────────────────────────────────────
    /// Teile pro Element beim Unterteilen
    pub subdivision_segments: usize,
    /// Abstand neuer Steuerpunkte (Pfad-Einheiten)
    pub control_point_offset: f32,

    // ── Lookup-Table ────────────────────────────────────────────
    /// Kapazität und Mindestabstand der Stützpunkte
    pub lookup_table: LookupTableOptions,

    // ── Bogenlänge ──────────────────────────────────────────────
    /// Toleranzen der adaptiven Integration
    pub quadrature: QuadratureOptions,
}

impl Default for GeometryOptions {
    fn default() -> Self {
        Self {
            subdivision_segments: SUBDIVISION_SEGMENTS,
            control_point_offset: CONTROL_POINT_OFFSET,
            lookup_table: LookupTableOptions::default(),
            quadrature: QuadratureOptions::default(),
        }
    }
}

impl GeometryOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)
            .with_context(|| format!("Optionen nicht schreibbar: {}", path.display()))?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("bez_path"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join(CONFIG_FILE_NAME)
    }
}
