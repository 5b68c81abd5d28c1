//! Dispatcher - one named entry point per Lunar Magic function.
//!
//! Every method builds an [`Operation`], renders it, hands it to the
//! [`ToolRunner`] and classifies the exit code. The methods share that path
//! through [`Dispatcher::dispatch`].

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, warn};

use crate::domain::{
    CompressionFormat, LevelExportFlags, LevelImportFlags, LevelNumber, Map16Location, Operation,
    RomSize,
};
use crate::error::{DispatchError, DispatchResult};
use crate::ports::ToolRunner;

/// Invokes Lunar Magic at a fixed path through a [`ToolRunner`].
///
/// The dispatcher holds no per-call state, so one instance can serve any
/// number of threads.
#[derive(Clone)]
pub struct Dispatcher {
    tool_path: PathBuf,
    runner: Arc<dyn ToolRunner>,
}

impl fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dispatcher")
            .field("tool_path", &self.tool_path)
            .finish_non_exhaustive()
    }
}

impl Dispatcher {
    /// Create a dispatcher for the executable at `tool_path`.
    pub fn new(tool_path: impl Into<PathBuf>, runner: Arc<dyn ToolRunner>) -> Self {
        Self {
            tool_path: tool_path.into(),
            runner,
        }
    }

    /// Path of the Lunar Magic executable this dispatcher invokes.
    pub fn tool_path(&self) -> &Path {
        &self.tool_path
    }

    /// Run one operation.
    ///
    /// Returns the outcome when the tool exits with 0. A non-zero exit becomes
    /// [`DispatchError::ToolFailed`] carrying the operation's diagnostic and
    /// the full captured output.
    pub fn dispatch(&self, operation: &Operation) -> DispatchResult {
        let command = operation.command_line();
        debug!(
            operation = operation.name(),
            tool = %self.tool_path.display(),
            "Running: {command}"
        );

        let outcome = self.runner.run(&self.tool_path, &command)?;

        if outcome.succeeded() {
            debug!(operation = operation.name(), "Lunar Magic finished");
            return Ok(outcome);
        }

        let message = operation.failure_message(&self.tool_path);
        warn!(
            operation = operation.name(),
            rom = %operation.target_rom().display(),
            exit_code = outcome.exit_code(),
            "{message}"
        );
        Err(DispatchError::ToolFailed {
            message,
            outcome: Box::new(outcome),
        })
    }

    /// Export the ROM's GFX files (`-ExportGFX`).
    pub fn export_gfx(&self, rom: impl AsRef<Path>) -> DispatchResult {
        self.dispatch(&Operation::ExportGfx {
            rom: rom.as_ref().to_path_buf(),
        })
    }

    /// Export the ROM's ExGFX files (`-ExportExGFX`).
    pub fn export_exgfx(&self, rom: impl AsRef<Path>) -> DispatchResult {
        self.dispatch(&Operation::ExportExGfx {
            rom: rom.as_ref().to_path_buf(),
        })
    }

    /// Import graphics into the ROM.
    ///
    /// Renders the same `-ImportExGFX` flag as [`Dispatcher::import_exgfx`].
    pub fn import_gfx(&self, rom: impl AsRef<Path>) -> DispatchResult {
        self.dispatch(&Operation::ImportGfx {
            rom: rom.as_ref().to_path_buf(),
        })
    }

    /// Import ExGFX files into the ROM (`-ImportExGFX`).
    pub fn import_exgfx(&self, rom: impl AsRef<Path>) -> DispatchResult {
        self.dispatch(&Operation::ImportExGfx {
            rom: rom.as_ref().to_path_buf(),
        })
    }

    /// Import both GFX and ExGFX files into the ROM (`-ImportAllGraphics`).
    pub fn import_all_graphics(&self, rom: impl AsRef<Path>) -> DispatchResult {
        self.dispatch(&Operation::ImportAllGraphics {
            rom: rom.as_ref().to_path_buf(),
        })
    }

    /// Export one level of the ROM to an MWL file (`-ExportLevel`).
    pub fn export_level(
        &self,
        rom: impl AsRef<Path>,
        mwl: impl AsRef<Path>,
        level: impl Into<LevelNumber>,
    ) -> DispatchResult {
        self.dispatch(&Operation::ExportLevel {
            rom: rom.as_ref().to_path_buf(),
            mwl: mwl.as_ref().to_path_buf(),
            level: level.into(),
        })
    }

    /// Import a level. `None` imports into the level stored in the MWL file.
    pub fn import_level(
        &self,
        rom: impl AsRef<Path>,
        mwl: impl AsRef<Path>,
        level: Option<LevelNumber>,
    ) -> DispatchResult {
        self.dispatch(&Operation::ImportLevel {
            rom: rom.as_ref().to_path_buf(),
            mwl: mwl.as_ref().to_path_buf(),
            level,
        })
    }

    /// Import a map16 file into the tileset of `level`.
    ///
    /// `location` is the optional tile position, rendered as a single `X,Y`
    /// hexadecimal argument.
    pub fn import_map16(
        &self,
        rom: impl AsRef<Path>,
        map16: impl AsRef<Path>,
        level: impl Into<LevelNumber>,
        location: Option<Map16Location>,
    ) -> DispatchResult {
        self.dispatch(&Operation::ImportMap16 {
            rom: rom.as_ref().to_path_buf(),
            map16: map16.as_ref().to_path_buf(),
            level: level.into(),
            location,
        })
    }

    /// Import a custom palette file into `level` (`-ImportCustomPalette`).
    pub fn import_custom_palette(
        &self,
        rom: impl AsRef<Path>,
        palette: impl AsRef<Path>,
        level: impl Into<LevelNumber>,
    ) -> DispatchResult {
        self.dispatch(&Operation::ImportCustomPalette {
            rom: rom.as_ref().to_path_buf(),
            palette: palette.as_ref().to_path_buf(),
            level: level.into(),
        })
    }

    /// Export the shared palette to a file (`-ExportSharedPalette`).
    pub fn export_shared_palette(
        &self,
        rom: impl AsRef<Path>,
        palette: impl AsRef<Path>,
    ) -> DispatchResult {
        self.dispatch(&Operation::ExportSharedPalette {
            rom: rom.as_ref().to_path_buf(),
            palette: palette.as_ref().to_path_buf(),
        })
    }

    /// Import the shared palette from a file (`-ImportSharedPalette`).
    pub fn import_shared_palette(
        &self,
        rom: impl AsRef<Path>,
        palette: impl AsRef<Path>,
    ) -> DispatchResult {
        self.dispatch(&Operation::ImportSharedPalette {
            rom: rom.as_ref().to_path_buf(),
            palette: palette.as_ref().to_path_buf(),
        })
    }

    /// Export all map16 data to a file (`-ExportAllMap16`).
    pub fn export_all_map16(&self, rom: impl AsRef<Path>, map16: impl AsRef<Path>) -> DispatchResult {
        self.dispatch(&Operation::ExportAllMap16 {
            rom: rom.as_ref().to_path_buf(),
            map16: map16.as_ref().to_path_buf(),
        })
    }

    /// Import all map16 data from a file (`-ImportAllMap16`).
    pub fn import_all_map16(&self, rom: impl AsRef<Path>, map16: impl AsRef<Path>) -> DispatchResult {
        self.dispatch(&Operation::ImportAllMap16 {
            rom: rom.as_ref().to_path_buf(),
            map16: map16.as_ref().to_path_buf(),
        })
    }

    /// Export every level into `directory`, naming files `<file_name_start><level>.mwl`.
    pub fn export_multiple_levels(
        &self,
        rom: impl AsRef<Path>,
        directory: impl AsRef<Path>,
        file_name_start: impl Into<String>,
        options: Option<LevelExportFlags>,
    ) -> DispatchResult {
        self.dispatch(&Operation::ExportMultipleLevels {
            rom: rom.as_ref().to_path_buf(),
            directory: directory.as_ref().to_path_buf(),
            file_name_start: file_name_start.into(),
            options,
        })
    }

    /// Import every MWL file in `directory`.
    ///
    /// `None` leaves the tool's default options in place.
    pub fn import_multiple_levels(
        &self,
        rom: impl AsRef<Path>,
        directory: impl AsRef<Path>,
        options: Option<LevelImportFlags>,
    ) -> DispatchResult {
        self.dispatch(&Operation::ImportMultipleLevels {
            rom: rom.as_ref().to_path_buf(),
            directory: directory.as_ref().to_path_buf(),
            options,
        })
    }

    /// Expand a ROM. Accepts a [`RomSize`] or its textual token; an unknown
    /// token fails with [`DispatchError::InvalidOption`] before anything runs.
    pub fn expand_rom<S>(&self, rom: impl AsRef<Path>, size: S) -> DispatchResult
    where
        S: TryInto<RomSize>,
        DispatchError: From<S::Error>,
    {
        let size = size.try_into()?;
        self.dispatch(&Operation::ExpandRom {
            rom: rom.as_ref().to_path_buf(),
            size,
        })
    }

    /// Change the graphics compression. Accepts a [`CompressionFormat`] or
    /// its textual token, rejected before spawn when unknown.
    pub fn change_compression<F>(&self, rom: impl AsRef<Path>, format: F) -> DispatchResult
    where
        F: TryInto<CompressionFormat>,
        DispatchError: From<F::Error>,
    {
        let format = format.try_into()?;
        self.dispatch(&Operation::ChangeCompression {
            rom: rom.as_ref().to_path_buf(),
            format,
        })
    }

    /// Copy global ExAnimation from `source` into `destination`.
    pub fn transfer_global_exanimation(
        &self,
        source: impl AsRef<Path>,
        destination: impl AsRef<Path>,
    ) -> DispatchResult {
        self.dispatch(&Operation::TransferGlobalExAnimation {
            source: source.as_ref().to_path_buf(),
            destination: destination.as_ref().to_path_buf(),
        })
    }

    /// Copy the overworld from `source` into `destination`.
    pub fn transfer_overworld(
        &self,
        source: impl AsRef<Path>,
        destination: impl AsRef<Path>,
    ) -> DispatchResult {
        self.dispatch(&Operation::TransferOverworld {
            source: source.as_ref().to_path_buf(),
            destination: destination.as_ref().to_path_buf(),
        })
    }

    /// Copy the title screen from `source` into `destination`.
    pub fn transfer_title_screen(
        &self,
        source: impl AsRef<Path>,
        destination: impl AsRef<Path>,
    ) -> DispatchResult {
        self.dispatch(&Operation::TransferTitleScreen {
            source: source.as_ref().to_path_buf(),
            destination: destination.as_ref().to_path_buf(),
        })
    }

    /// Copy the credits from `source` into `destination`.
    pub fn transfer_credits(
        &self,
        source: impl AsRef<Path>,
        destination: impl AsRef<Path>,
    ) -> DispatchResult {
        self.dispatch(&Operation::TransferCredits {
            source: source.as_ref().to_path_buf(),
            destination: destination.as_ref().to_path_buf(),
        })
    }

    /// Export the title screen moves to a file (`-ExportTitleMoves`).
    pub fn export_title_moves(
        &self,
        rom: impl AsRef<Path>,
        title_moves: impl AsRef<Path>,
    ) -> DispatchResult {
        self.dispatch(&Operation::ExportTitleMoves {
            rom: rom.as_ref().to_path_buf(),
            title_moves: title_moves.as_ref().to_path_buf(),
        })
    }

    /// Import the title screen moves from a file (`-ImportTitleMoves`).
    pub fn import_title_moves(
        &self,
        rom: impl AsRef<Path>,
        title_moves: impl AsRef<Path>,
    ) -> DispatchResult {
        self.dispatch(&Operation::ImportTitleMoves {
            rom: rom.as_ref().to_path_buf(),
            title_moves: title_moves.as_ref().to_path_buf(),
        })
    }
}
