//! Subcommands, one per Lunar Magic operation.
//!
//! Level numbers and map16 coordinates are hexadecimal, as Lunar Magic
//! shows them. Size and compression arguments take the tool's own tokens.

use std::path::PathBuf;

use clap::Subcommand;
use lmwrap_core::{
    CompressionFormat, LevelExportFlags, LevelImportFlags, LevelNumber, Map16Location, Operation,
    RomSize,
};

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Export GFX files from a ROM
    #[command(name = "export-gfx")]
    ExportGfx {
        /// ROM to export from
        rom: PathBuf,
    },

    /// Export ExGFX files from a ROM
    #[command(name = "export-exgfx")]
    ExportExGfx {
        /// ROM to export from
        rom: PathBuf,
    },

    /// Import GFX files into a ROM
    #[command(name = "import-gfx")]
    ImportGfx {
        /// ROM to import into
        rom: PathBuf,
    },

    /// Import ExGFX files into a ROM
    #[command(name = "import-exgfx")]
    ImportExGfx {
        /// ROM to import into
        rom: PathBuf,
    },

    /// Import GFX and ExGFX files into a ROM
    #[command(name = "import-all-graphics")]
    ImportAllGraphics {
        /// ROM to import into
        rom: PathBuf,
    },

    /// Export one level to an MWL file
    #[command(name = "export-level")]
    ExportLevel {
        rom: PathBuf,
        /// MWL file to write
        mwl: PathBuf,
        /// Level number in hex (e.g. 105)
        level: LevelNumber,
    },

    /// Import one level from an MWL file
    #[command(name = "import-level")]
    ImportLevel {
        rom: PathBuf,
        /// MWL file to read
        mwl: PathBuf,
        /// Target level in hex; defaults to the level stored in the MWL file
        level: Option<LevelNumber>,
    },

    /// Import a map16 file into a level's tileset
    #[command(name = "import-map16")]
    ImportMap16 {
        rom: PathBuf,
        map16: PathBuf,
        /// Level whose tileset receives the tiles, in hex
        level: LevelNumber,
        /// Tile position as hex X,Y (e.g. 2,40)
        #[arg(long, value_name = "X,Y")]
        at: Option<Map16Location>,
    },

    /// Import a custom palette into a level
    #[command(name = "import-custom-palette")]
    ImportCustomPalette {
        rom: PathBuf,
        palette: PathBuf,
        /// Level number in hex
        level: LevelNumber,
    },

    /// Export the shared palette to a file
    #[command(name = "export-shared-palette")]
    ExportSharedPalette { rom: PathBuf, palette: PathBuf },

    /// Import the shared palette from a file
    #[command(name = "import-shared-palette")]
    ImportSharedPalette { rom: PathBuf, palette: PathBuf },

    /// Export all map16 data to a file
    #[command(name = "export-all-map16")]
    ExportAllMap16 { rom: PathBuf, map16: PathBuf },

    /// Import all map16 data from a file
    #[command(name = "import-all-map16")]
    ImportAllMap16 { rom: PathBuf, map16: PathBuf },

    /// Export every level to MWL files
    #[command(name = "export-mult-levels")]
    ExportMultLevels {
        rom: PathBuf,
        /// Directory to write the MWL files into
        directory: PathBuf,
        /// File name prefix, followed by the level number
        #[arg(default_value = "level ")]
        file_name_start: String,
        /// Only export modified levels
        #[arg(long)]
        only_modified: bool,
        /// Raw option bits in hex
        #[arg(long, value_parser = LevelExportFlags::from_hex, conflicts_with = "only_modified")]
        options: Option<LevelExportFlags>,
    },

    /// Import every MWL file in a directory
    #[command(name = "import-mult-levels")]
    ImportMultLevels {
        rom: PathBuf,
        /// Directory holding the MWL files
        directory: PathBuf,
        /// Clear secondary exits of the imported levels
        #[arg(long)]
        clear_secondary_exits: bool,
        /// Raw option bits in hex
        #[arg(long, value_parser = LevelImportFlags::from_hex, conflicts_with = "clear_secondary_exits")]
        options: Option<LevelImportFlags>,
    },

    /// Expand a ROM to a larger size
    #[command(name = "expand-rom")]
    ExpandRom {
        rom: PathBuf,
        /// One of 2MB, 3MB, 4MB, 6MB_SA1, 8MB_SA1
        size: RomSize,
    },

    /// Change the graphics compression format
    #[command(name = "change-compression")]
    ChangeCompression {
        rom: PathBuf,
        /// One of LC_LZ2_Orig, LC_LZ2_Speed, LC_LZ3
        format: CompressionFormat,
    },

    /// Copy global ExAnimation from one ROM to another
    #[command(name = "transfer-global-exanimation")]
    TransferGlobalExAnimation {
        /// ROM to copy from
        source: PathBuf,
        /// ROM to copy into
        destination: PathBuf,
    },

    /// Copy the overworld from one ROM to another
    #[command(name = "transfer-overworld")]
    TransferOverworld { source: PathBuf, destination: PathBuf },

    /// Copy the title screen from one ROM to another
    #[command(name = "transfer-title-screen")]
    TransferTitleScreen { source: PathBuf, destination: PathBuf },

    /// Copy the credits from one ROM to another
    #[command(name = "transfer-credits")]
    TransferCredits { source: PathBuf, destination: PathBuf },

    /// Export title screen moves to a file
    #[command(name = "export-title-moves")]
    ExportTitleMoves { rom: PathBuf, title_moves: PathBuf },

    /// Import title screen moves from a file
    #[command(name = "import-title-moves")]
    ImportTitleMoves { rom: PathBuf, title_moves: PathBuf },
}

impl Commands {
    /// The operation this subcommand requests.
    pub fn into_operation(self) -> Operation {
        match self {
            Self::ExportGfx { rom } => Operation::ExportGfx { rom },
            Self::ExportExGfx { rom } => Operation::ExportExGfx { rom },
            Self::ImportGfx { rom } => Operation::ImportGfx { rom },
            Self::ImportExGfx { rom } => Operation::ImportExGfx { rom },
            Self::ImportAllGraphics { rom } => Operation::ImportAllGraphics { rom },
            Self::ExportLevel { rom, mwl, level } => Operation::ExportLevel { rom, mwl, level },
            Self::ImportLevel { rom, mwl, level } => Operation::ImportLevel { rom, mwl, level },
            Self::ImportMap16 {
                rom,
                map16,
                level,
                at,
            } => Operation::ImportMap16 {
                rom,
                map16,
                level,
                location: at,
            },
            Self::ImportCustomPalette {
                rom,
                palette,
                level,
            } => Operation::ImportCustomPalette {
                rom,
                palette,
                level,
            },
            Self::ExportSharedPalette { rom, palette } => {
                Operation::ExportSharedPalette { rom, palette }
            }
            Self::ImportSharedPalette { rom, palette } => {
                Operation::ImportSharedPalette { rom, palette }
            }
            Self::ExportAllMap16 { rom, map16 } => Operation::ExportAllMap16 { rom, map16 },
            Self::ImportAllMap16 { rom, map16 } => Operation::ImportAllMap16 { rom, map16 },
            Self::ExportMultLevels {
                rom,
                directory,
                file_name_start,
                only_modified,
                options,
            } => Operation::ExportMultipleLevels {
                rom,
                directory,
                file_name_start,
                options: options.or(only_modified.then_some(LevelExportFlags::ONLY_MODIFIED)),
            },
            Self::ImportMultLevels {
                rom,
                directory,
                clear_secondary_exits,
                options,
            } => Operation::ImportMultipleLevels {
                rom,
                directory,
                options: options.or(
                    clear_secondary_exits.then_some(LevelImportFlags::CLEAR_SECONDARY_EXITS),
                ),
            },
            Self::ExpandRom { rom, size } => Operation::ExpandRom { rom, size },
            Self::ChangeCompression { rom, format } => Operation::ChangeCompression { rom, format },
            Self::TransferGlobalExAnimation {
                source,
                destination,
            } => Operation::TransferGlobalExAnimation {
                source,
                destination,
            },
            Self::TransferOverworld {
                source,
                destination,
            } => Operation::TransferOverworld {
                source,
                destination,
            },
            Self::TransferTitleScreen {
                source,
                destination,
            } => Operation::TransferTitleScreen {
                source,
                destination,
            },
            Self::TransferCredits {
                source,
                destination,
            } => Operation::TransferCredits {
                source,
                destination,
            },
            Self::ExportTitleMoves { rom, title_moves } => {
                Operation::ExportTitleMoves { rom, title_moves }
            }
            Self::ImportTitleMoves { rom, title_moves } => {
                Operation::ImportTitleMoves { rom, title_moves }
            }
        }
    }
}
