//! Typed requests for every Lunar Magic command-line function.
//!
//! Rendering is pure: [`Operation::command_line`] only formats fields, it
//! never touches the filesystem. The shapes here are a compatibility contract
//! with the tool and are covered by golden tests below.

use std::fmt;
use std::path::{Path, PathBuf};

use super::command_line::CommandLine;
use super::level::{LevelNumber, Map16Location};
use super::options::{CompressionFormat, LevelExportFlags, LevelImportFlags, RomSize};

/// One invocation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    /// Export GFX files from `rom`.
    ExportGfx {
        rom: PathBuf,
    },
    /// Export ExGFX files from `rom`.
    ExportExGfx {
        rom: PathBuf,
    },
    /// Imports graphics into the ROM.
    ///
    /// Renders with `-ImportExGFX`, the same flag as [`Operation::ImportExGfx`].
    /// That is the shape known to work against the tool and it is kept as-is.
    ImportGfx {
        rom: PathBuf,
    },
    /// Import ExGFX files into `rom`.
    ImportExGfx {
        rom: PathBuf,
    },
    /// Import GFX and ExGFX files into `rom`.
    ImportAllGraphics {
        rom: PathBuf,
    },
    /// Export `level` from `rom` to the MWL file `mwl`.
    ExportLevel {
        rom: PathBuf,
        mwl: PathBuf,
        level: LevelNumber,
    },
    /// Import the MWL file `mwl` into `rom`.
    ///
    /// Without a level number the tool uses the one stored in the MWL file.
    ImportLevel {
        rom: PathBuf,
        mwl: PathBuf,
        level: Option<LevelNumber>,
    },
    /// Import the map16 file `map16` into `rom`.
    ///
    /// The level selects the tileset context. Neither it nor the location is
    /// documented by the tool; the rendered order has been verified manually.
    ImportMap16 {
        rom: PathBuf,
        map16: PathBuf,
        level: LevelNumber,
        location: Option<Map16Location>,
    },
    /// Import a custom palette file into `level`.
    ImportCustomPalette {
        rom: PathBuf,
        palette: PathBuf,
        level: LevelNumber,
    },
    /// Export the shared palette to `palette`.
    ExportSharedPalette {
        rom: PathBuf,
        palette: PathBuf,
    },
    /// Import the shared palette from `palette`.
    ImportSharedPalette {
        rom: PathBuf,
        palette: PathBuf,
    },
    /// Export all map16 data to `map16`.
    ExportAllMap16 {
        rom: PathBuf,
        map16: PathBuf,
    },
    /// Import all map16 data from `map16`.
    ImportAllMap16 {
        rom: PathBuf,
        map16: PathBuf,
    },
    /// Writes one MWL per level into `directory`, each named
    /// `<file_name_start><level>.mwl`.
    ExportMultipleLevels {
        rom: PathBuf,
        directory: PathBuf,
        file_name_start: String,
        options: Option<LevelExportFlags>,
    },
    /// Import every MWL file in `directory`.
    ImportMultipleLevels {
        rom: PathBuf,
        directory: PathBuf,
        options: Option<LevelImportFlags>,
    },
    /// Expand `rom` to `size`.
    ExpandRom {
        rom: PathBuf,
        size: RomSize,
    },
    /// Switch the graphics compression of `rom` to `format`.
    ChangeCompression {
        rom: PathBuf,
        format: CompressionFormat,
    },
    /// Copy global ExAnimation from `source` into `destination`.
    TransferGlobalExAnimation {
        source: PathBuf,
        destination: PathBuf,
    },
    /// Copy the overworld from `source` into `destination`.
    TransferOverworld {
        source: PathBuf,
        destination: PathBuf,
    },
    /// Copy the title screen from `source` into `destination`.
    TransferTitleScreen {
        source: PathBuf,
        destination: PathBuf,
    },
    /// Copy the credits from `source` into `destination`.
    TransferCredits {
        source: PathBuf,
        destination: PathBuf,
    },
    /// Export title screen moves to `title_moves`.
    ExportTitleMoves {
        rom: PathBuf,
        title_moves: PathBuf,
    },
    /// Import title screen moves from `title_moves`.
    ImportTitleMoves {
        rom: PathBuf,
        title_moves: PathBuf,
    },
}

impl Operation {
    /// Stable kebab-case identifier, used in logs and as the CLI subcommand.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::ExportGfx { .. } => "export-gfx",
            Self::ExportExGfx { .. } => "export-exgfx",
            Self::ImportGfx { .. } => "import-gfx",
            Self::ImportExGfx { .. } => "import-exgfx",
            Self::ImportAllGraphics { .. } => "import-all-graphics",
            Self::ExportLevel { .. } => "export-level",
            Self::ImportLevel { .. } => "import-level",
            Self::ImportMap16 { .. } => "import-map16",
            Self::ImportCustomPalette { .. } => "import-custom-palette",
            Self::ExportSharedPalette { .. } => "export-shared-palette",
            Self::ImportSharedPalette { .. } => "import-shared-palette",
            Self::ExportAllMap16 { .. } => "export-all-map16",
            Self::ImportAllMap16 { .. } => "import-all-map16",
            Self::ExportMultipleLevels { .. } => "export-mult-levels",
            Self::ImportMultipleLevels { .. } => "import-mult-levels",
            Self::ExpandRom { .. } => "expand-rom",
            Self::ChangeCompression { .. } => "change-compression",
            Self::TransferGlobalExAnimation { .. } => "transfer-global-exanimation",
            Self::TransferOverworld { .. } => "transfer-overworld",
            Self::TransferTitleScreen { .. } => "transfer-title-screen",
            Self::TransferCredits { .. } => "transfer-credits",
            Self::ExportTitleMoves { .. } => "export-title-moves",
            Self::ImportTitleMoves { .. } => "import-title-moves",
        }
    }

    /// The ROM this operation writes to, or reads from for exports.
    pub fn target_rom(&self) -> &Path {
        match self {
            Self::ExportGfx { rom }
            | Self::ExportExGfx { rom }
            | Self::ImportGfx { rom }
            | Self::ImportExGfx { rom }
            | Self::ImportAllGraphics { rom }
            | Self::ExportLevel { rom, .. }
            | Self::ImportLevel { rom, .. }
            | Self::ImportMap16 { rom, .. }
            | Self::ImportCustomPalette { rom, .. }
            | Self::ExportSharedPalette { rom, .. }
            | Self::ImportSharedPalette { rom, .. }
            | Self::ExportAllMap16 { rom, .. }
            | Self::ImportAllMap16 { rom, .. }
            | Self::ExportMultipleLevels { rom, .. }
            | Self::ImportMultipleLevels { rom, .. }
            | Self::ExpandRom { rom, .. }
            | Self::ChangeCompression { rom, .. }
            | Self::ExportTitleMoves { rom, .. }
            | Self::ImportTitleMoves { rom, .. } => rom,
            Self::TransferGlobalExAnimation { destination, .. }
            | Self::TransferOverworld { destination, .. }
            | Self::TransferTitleScreen { destination, .. }
            | Self::TransferCredits { destination, .. } => destination,
        }
    }

    /// Render the arguments the tool expects for this request.
    pub fn command_line(&self) -> CommandLine {
        match self {
            Self::ExportGfx { rom } => CommandLine::new("-ExportGFX").path(rom),
            Self::ExportExGfx { rom } => CommandLine::new("-ExportExGFX").path(rom),
            Self::ImportGfx { rom } | Self::ImportExGfx { rom } => {
                CommandLine::new("-ImportExGFX").path(rom)
            }
            Self::ImportAllGraphics { rom } => CommandLine::new("-ImportAllGraphics").path(rom),
            Self::ExportLevel { rom, mwl, level } => CommandLine::new("-ExportLevel")
                .path(rom)
                .path(mwl)
                .value(level.token()),
            Self::ImportLevel { rom, mwl, level } => CommandLine::new("-ImportLevel")
                .path(rom)
                .path(mwl)
                .value_opt(level.map(LevelNumber::token)),
            Self::ImportMap16 {
                rom,
                map16,
                level,
                location,
            } => CommandLine::new("-ImportMap16")
                .path(rom)
                .path(map16)
                .value(level.token())
                .value_opt(location.map(Map16Location::token)),
            Self::ImportCustomPalette {
                rom,
                palette,
                level,
            } => CommandLine::new("-ImportCustomPalette")
                .path(rom)
                .path(palette)
                .value(level.token()),
            Self::ExportSharedPalette { rom, palette } => {
                CommandLine::new("-ExportSharedPalette")
                    .path(rom)
                    .bare_path(palette)
            }
            Self::ImportSharedPalette { rom, palette } => {
                CommandLine::new("-ImportSharedPalette")
                    .path(rom)
                    .bare_path(palette)
            }
            Self::ExportAllMap16 { rom, map16 } => {
                CommandLine::new("-ExportAllMap16").path(rom).bare_path(map16)
            }
            Self::ImportAllMap16 { rom, map16 } => {
                CommandLine::new("-ImportAllMap16").path(rom).bare_path(map16)
            }
            Self::ExportMultipleLevels {
                rom,
                directory,
                file_name_start,
                options,
            } => CommandLine::new("-ExportMultLevels")
                .path(rom)
                .path(directory.join(file_name_start))
                .value_opt(options.map(LevelExportFlags::token)),
            Self::ImportMultipleLevels {
                rom,
                directory,
                options,
            } => CommandLine::new("-ImportMultLevels")
                .path(rom)
                .path(directory)
                .value_opt(options.map(LevelImportFlags::token)),
            Self::ExpandRom { rom, size } => {
                CommandLine::new("-ExpandROM").path(rom).value(size.token())
            }
            Self::ChangeCompression { rom, format } => CommandLine::new("-ChangeCompression")
                .path(rom)
                .value(format.token()),
            // Transfers take the destination first.
            Self::TransferGlobalExAnimation {
                source,
                destination,
            } => CommandLine::new("-TransferLevelGlobalExAnim")
                .path(destination)
                .path(source),
            Self::TransferOverworld {
                source,
                destination,
            } => CommandLine::new("-TransferOverworld")
                .path(destination)
                .path(source),
            Self::TransferTitleScreen {
                source,
                destination,
            } => CommandLine::new("-TransferTitleScreen")
                .path(destination)
                .path(source),
            Self::TransferCredits {
                source,
                destination,
            } => CommandLine::new("-TransferCredits")
                .path(destination)
                .path(source),
            Self::ExportTitleMoves { rom, title_moves } => CommandLine::new("-ExportTitleMoves")
                .path(rom)
                .path(title_moves),
            Self::ImportTitleMoves { rom, title_moves } => CommandLine::new("-ImportTitleMoves")
                .path(rom)
                .path(title_moves),
        }
    }

    /// Diagnostic for a run that exited non-zero, naming the inputs and the tool.
    pub fn failure_message(&self, tool_path: &Path) -> String {
        let tool = tool_path.display();
        match self {
            Self::ExportGfx { rom } => {
                format!("Failed to export GFX from '{}' using '{tool}'", rom.display())
            }
            Self::ExportExGfx { rom } => {
                format!("Failed to export ExGFX from '{}' using '{tool}'", rom.display())
            }
            Self::ImportGfx { rom } => {
                format!("Failed to import GFX into '{}' using '{tool}'", rom.display())
            }
            Self::ImportExGfx { rom } => {
                format!("Failed to import ExGFX into '{}' using '{tool}'", rom.display())
            }
            Self::ImportAllGraphics { rom } => format!(
                "Failed to import all graphics into '{}' using '{tool}'",
                rom.display()
            ),
            Self::ExportLevel { rom, mwl, level } => format!(
                "Failed to export level {level} from '{}' to '{}' using '{tool}'",
                rom.display(),
                mwl.display()
            ),
            Self::ImportLevel {
                rom,
                mwl,
                level: Some(level),
            } => format!(
                "Failed to import level {level} from '{}' into '{}' using '{tool}'",
                mwl.display(),
                rom.display()
            ),
            Self::ImportLevel {
                rom,
                mwl,
                level: None,
            } => format!(
                "Failed to import level from '{}' into '{}' using '{tool}'",
                mwl.display(),
                rom.display()
            ),
            Self::ImportMap16 {
                rom,
                map16,
                level,
                location: Some(location),
            } => format!(
                "Failed to import map16 file '{}' into level {level} of '{}' at coordinates {location} using '{tool}'",
                map16.display(),
                rom.display()
            ),
            Self::ImportMap16 {
                rom,
                map16,
                level,
                location: None,
            } => format!(
                "Failed to import map16 file '{}' into level {level} of '{}' using '{tool}'",
                map16.display(),
                rom.display()
            ),
            Self::ImportCustomPalette {
                rom,
                palette,
                level,
            } => format!(
                "Failed to import custom palette '{}' into level {level} of '{}' using '{tool}'",
                palette.display(),
                rom.display()
            ),
            Self::ExportSharedPalette { rom, palette } => format!(
                "Failed to export shared palette to '{}' from '{}' using '{tool}'",
                palette.display(),
                rom.display()
            ),
            Self::ImportSharedPalette { rom, palette } => format!(
                "Failed to import shared palette '{}' into '{}' using '{tool}'",
                palette.display(),
                rom.display()
            ),
            Self::ExportAllMap16 { rom, map16 } => format!(
                "Failed to export all map16 file to '{}' from '{}' using '{tool}'",
                map16.display(),
                rom.display()
            ),
            Self::ImportAllMap16 { rom, map16 } => format!(
                "Failed to import all map16 file '{}' into '{}' using '{tool}'",
                map16.display(),
                rom.display()
            ),
            Self::ExportMultipleLevels {
                rom,
                directory,
                file_name_start,
                options: Some(options),
            } => format!(
                "Failed to export multiple levels with prefix '{file_name_start}' to '{}' from '{}' with options '{}' using '{tool}'",
                directory.display(),
                rom.display(),
                options.token()
            ),
            Self::ExportMultipleLevels {
                rom,
                directory,
                file_name_start,
                options: None,
            } => format!(
                "Failed to export multiple levels with prefix '{file_name_start}' to '{}' from '{}' using '{tool}'",
                directory.display(),
                rom.display()
            ),
            Self::ImportMultipleLevels {
                rom,
                directory,
                options: Some(options),
            } => format!(
                "Failed to import multiple levels from '{}' into '{}' with options '{}' using '{tool}'",
                directory.display(),
                rom.display(),
                options.token()
            ),
            Self::ImportMultipleLevels {
                rom,
                directory,
                options: None,
            } => format!(
                "Failed to import multiple levels from '{}' into '{}' using '{tool}'",
                directory.display(),
                rom.display()
            ),
            Self::ExpandRom { rom, size } => {
                format!("Failed to expand '{}' to {size} using '{tool}'", rom.display())
            }
            Self::ChangeCompression { rom, format } => format!(
                "Failed to change compression in '{}' to {format} using '{tool}'",
                rom.display()
            ),
            Self::TransferGlobalExAnimation {
                source,
                destination,
            } => format!(
                "Failed to transfer global ExAnimation from '{}' to '{}' using '{tool}'",
                source.display(),
                destination.display()
            ),
            Self::TransferOverworld {
                source,
                destination,
            } => format!(
                "Failed to transfer overworld from '{}' to '{}' using '{tool}'",
                source.display(),
                destination.display()
            ),
            Self::TransferTitleScreen {
                source,
                destination,
            } => format!(
                "Failed to transfer title screen from '{}' to '{}' using '{tool}'",
                source.display(),
                destination.display()
            ),
            Self::TransferCredits {
                source,
                destination,
            } => format!(
                "Failed to transfer credits from '{}' to '{}' using '{tool}'",
                source.display(),
                destination.display()
            ),
            Self::ExportTitleMoves { rom, title_moves } => format!(
                "Failed to export title moves from '{}' to '{}' using '{tool}'",
                rom.display(),
                title_moves.display()
            ),
            Self::ImportTitleMoves { rom, title_moves } => format!(
                "Failed to import title moves from '{}' into '{}' using '{tool}'",
                title_moves.display(),
                rom.display()
            ),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rom() -> PathBuf {
        PathBuf::from("rom.smc")
    }

    fn rendered(op: &Operation) -> String {
        op.command_line().to_string()
    }

    #[test]
    fn graphics_operations() {
        assert_eq!(rendered(&Operation::ExportGfx { rom: rom() }), r#"-ExportGFX "rom.smc""#);
        assert_eq!(
            rendered(&Operation::ExportExGfx { rom: rom() }),
            r#"-ExportExGFX "rom.smc""#
        );
        assert_eq!(
            rendered(&Operation::ImportExGfx { rom: rom() }),
            r#"-ImportExGFX "rom.smc""#
        );
        assert_eq!(
            rendered(&Operation::ImportAllGraphics { rom: rom() }),
            r#"-ImportAllGraphics "rom.smc""#
        );
    }

    #[test]
    fn import_gfx_uses_the_exgfx_flag() {
        let gfx = Operation::ImportGfx { rom: rom() };
        let exgfx = Operation::ImportExGfx { rom: rom() };
        assert_eq!(gfx.command_line(), exgfx.command_line());
        assert_eq!(rendered(&gfx), r#"-ImportExGFX "rom.smc""#);
        // The diagnostics still tell the two apart.
        assert_ne!(
            gfx.failure_message(Path::new("lm.exe")),
            exgfx.failure_message(Path::new("lm.exe"))
        );
    }

    #[test]
    fn export_level_renders_unpadded_hex() {
        let op = Operation::ExportLevel {
            rom: rom(),
            mwl: "level.mwl".into(),
            level: LevelNumber::new(0x105),
        };
        assert_eq!(rendered(&op), r#"-ExportLevel "rom.smc" "level.mwl" 105"#);

        let low = Operation::ExportLevel {
            rom: rom(),
            mwl: "level.mwl".into(),
            level: LevelNumber::new(0x1F),
        };
        assert_eq!(rendered(&low), r#"-ExportLevel "rom.smc" "level.mwl" 1F"#);
    }

    #[test]
    fn import_level_both_shapes() {
        let without = Operation::ImportLevel {
            rom: rom(),
            mwl: "level.mwl".into(),
            level: None,
        };
        assert_eq!(rendered(&without), r#"-ImportLevel "rom.smc" "level.mwl""#);

        let with = Operation::ImportLevel {
            rom: rom(),
            mwl: "level.mwl".into(),
            level: Some(LevelNumber::new(0x106)),
        };
        assert_eq!(rendered(&with), r#"-ImportLevel "rom.smc" "level.mwl" 106"#);
    }

    #[test]
    fn import_map16_both_shapes() {
        let without = Operation::ImportMap16 {
            rom: rom(),
            map16: "partial.map16".into(),
            level: LevelNumber::new(0x105),
            location: None,
        };
        assert_eq!(
            rendered(&without),
            r#"-ImportMap16 "rom.smc" "partial.map16" 105"#
        );

        let with = Operation::ImportMap16 {
            rom: rom(),
            map16: "partial.map16".into(),
            level: LevelNumber::new(0x105),
            location: Some(Map16Location::new(0x2, 0x4A)),
        };
        assert_eq!(
            rendered(&with),
            r#"-ImportMap16 "rom.smc" "partial.map16" 105 2,4A"#
        );
        assert_eq!(with.command_line().len(), 5);
    }

    #[test]
    fn palette_and_map16_operations() {
        let custom = Operation::ImportCustomPalette {
            rom: rom(),
            palette: "palette.pal".into(),
            level: LevelNumber::new(0x105),
        };
        assert_eq!(
            rendered(&custom),
            r#"-ImportCustomPalette "rom.smc" "palette.pal" 105"#
        );

        let export_shared = Operation::ExportSharedPalette {
            rom: rom(),
            palette: "shared.pal".into(),
        };
        assert_eq!(
            rendered(&export_shared),
            r#"-ExportSharedPalette "rom.smc" shared.pal"#
        );

        let import_shared = Operation::ImportSharedPalette {
            rom: rom(),
            palette: "shared.pal".into(),
        };
        assert_eq!(
            rendered(&import_shared),
            r#"-ImportSharedPalette "rom.smc" shared.pal"#
        );

        let export_all = Operation::ExportAllMap16 {
            rom: rom(),
            map16: "all.map16".into(),
        };
        assert_eq!(rendered(&export_all), r#"-ExportAllMap16 "rom.smc" all.map16"#);

        let import_all = Operation::ImportAllMap16 {
            rom: rom(),
            map16: "all.map16".into(),
        };
        assert_eq!(rendered(&import_all), r#"-ImportAllMap16 "rom.smc" all.map16"#);
    }

    #[test]
    fn export_multiple_levels_joins_prefix_onto_directory() {
        let prefix = Path::new("levels").join("level ");
        let without = Operation::ExportMultipleLevels {
            rom: rom(),
            directory: "levels".into(),
            file_name_start: "level ".into(),
            options: None,
        };
        assert_eq!(
            rendered(&without),
            format!(r#"-ExportMultLevels "rom.smc" "{}""#, prefix.display())
        );

        let with = Operation::ExportMultipleLevels {
            rom: rom(),
            directory: "levels".into(),
            file_name_start: "level ".into(),
            options: Some(LevelExportFlags::ONLY_MODIFIED),
        };
        assert_eq!(
            rendered(&with),
            format!(r#"-ExportMultLevels "rom.smc" "{}" 1"#, prefix.display())
        );
    }

    #[test]
    fn empty_options_still_change_the_shape() {
        let op = Operation::ImportMultipleLevels {
            rom: rom(),
            directory: "levels".into(),
            options: Some(LevelImportFlags::empty()),
        };
        assert_eq!(rendered(&op), r#"-ImportMultLevels "rom.smc" "levels" 0"#);

        let defaults = Operation::ImportMultipleLevels {
            rom: rom(),
            directory: "levels".into(),
            options: None,
        };
        assert_eq!(rendered(&defaults), r#"-ImportMultLevels "rom.smc" "levels""#);

        let clear = Operation::ImportMultipleLevels {
            rom: rom(),
            directory: "levels".into(),
            options: Some(LevelImportFlags::CLEAR_SECONDARY_EXITS),
        };
        assert_eq!(rendered(&clear), r#"-ImportMultLevels "rom.smc" "levels" 1"#);
    }

    #[test]
    fn expand_rom_renders_every_size() {
        let expected = ["2MB", "3MB", "4MB", "6MB_SA1", "8MB_SA1"];
        for (size, token) in RomSize::ALL.into_iter().zip(expected) {
            let op = Operation::ExpandRom { rom: rom(), size };
            assert_eq!(rendered(&op), format!(r#"-ExpandROM "rom.smc" {token}"#));
        }
    }

    #[test]
    fn change_compression_renders_every_format() {
        let expected = ["LC_LZ2_Orig", "LC_LZ2_Speed", "LC_LZ3"];
        for (format, token) in CompressionFormat::ALL.into_iter().zip(expected) {
            let op = Operation::ChangeCompression { rom: rom(), format };
            assert_eq!(
                rendered(&op),
                format!(r#"-ChangeCompression "rom.smc" {token}"#)
            );
        }
    }

    #[test]
    fn transfers_put_destination_first() {
        let source = PathBuf::from("src.smc");
        let destination = PathBuf::from("dest.smc");
        let cases = [
            (
                Operation::TransferGlobalExAnimation {
                    source: source.clone(),
                    destination: destination.clone(),
                },
                "-TransferLevelGlobalExAnim",
            ),
            (
                Operation::TransferOverworld {
                    source: source.clone(),
                    destination: destination.clone(),
                },
                "-TransferOverworld",
            ),
            (
                Operation::TransferTitleScreen {
                    source: source.clone(),
                    destination: destination.clone(),
                },
                "-TransferTitleScreen",
            ),
            (
                Operation::TransferCredits {
                    source: source.clone(),
                    destination: destination.clone(),
                },
                "-TransferCredits",
            ),
        ];

        for (op, flag) in cases {
            assert_eq!(rendered(&op), format!(r#"{flag} "dest.smc" "src.smc""#));
            assert_eq!(op.target_rom(), destination.as_path());
        }
    }

    #[test]
    fn title_moves_quote_both_paths() {
        let export = Operation::ExportTitleMoves {
            rom: rom(),
            title_moves: "moves.zst".into(),
        };
        assert_eq!(
            rendered(&export),
            r#"-ExportTitleMoves "rom.smc" "moves.zst""#
        );

        let import = Operation::ImportTitleMoves {
            rom: rom(),
            title_moves: "moves.zst".into(),
        };
        assert_eq!(
            rendered(&import),
            r#"-ImportTitleMoves "rom.smc" "moves.zst""#
        );
    }

    #[test]
    fn paths_with_spaces_stay_single_tokens() {
        let op = Operation::ExportLevel {
            rom: "my hacks/my hack.smc".into(),
            mwl: "levels/level 105.mwl".into(),
            level: LevelNumber::new(0x105),
        };
        let args: Vec<_> = op
            .command_line()
            .args()
            .map(|a| a.to_string_lossy().into_owned())
            .collect();
        assert_eq!(
            args,
            [
                "-ExportLevel",
                "my hacks/my hack.smc",
                "levels/level 105.mwl",
                "105"
            ]
        );
    }

    #[test]
    fn failure_messages_name_inputs_and_tool() {
        let tool = Path::new("C:/tools/Lunar Magic.exe");
        let op = Operation::ExportLevel {
            rom: rom(),
            mwl: "level.mwl".into(),
            level: LevelNumber::new(0x5),
        };
        assert_eq!(
            op.failure_message(tool),
            "Failed to export level 005 from 'rom.smc' to 'level.mwl' using 'C:/tools/Lunar Magic.exe'"
        );

        let map16 = Operation::ImportMap16 {
            rom: rom(),
            map16: "tiles.map16".into(),
            level: LevelNumber::new(0x105),
            location: Some(Map16Location::new(1, 0x1F)),
        };
        assert_eq!(
            map16.failure_message(tool),
            "Failed to import map16 file 'tiles.map16' into level 105 of 'rom.smc' at coordinates X=1, Y=1F using 'C:/tools/Lunar Magic.exe'"
        );

        let expand = Operation::ExpandRom {
            rom: rom(),
            size: RomSize::Mb4,
        };
        assert_eq!(
            expand.failure_message(tool),
            "Failed to expand 'rom.smc' to 4MB using 'C:/tools/Lunar Magic.exe'"
        );
    }

    #[test]
    fn every_failure_message_arm() {
        let level = LevelNumber::new(0x105);
        let cases = [
            (
                Operation::ExportGfx { rom: rom() },
                "Failed to export GFX from 'rom.smc' using 'lm.exe'",
            ),
            (
                Operation::ExportExGfx { rom: rom() },
                "Failed to export ExGFX from 'rom.smc' using 'lm.exe'",
            ),
            (
                Operation::ImportGfx { rom: rom() },
                "Failed to import GFX into 'rom.smc' using 'lm.exe'",
            ),
            (
                Operation::ImportExGfx { rom: rom() },
                "Failed to import ExGFX into 'rom.smc' using 'lm.exe'",
            ),
            (
                Operation::ImportAllGraphics { rom: rom() },
                "Failed to import all graphics into 'rom.smc' using 'lm.exe'",
            ),
            (
                Operation::ExportLevel {
                    rom: rom(),
                    mwl: "a.mwl".into(),
                    level,
                },
                "Failed to export level 105 from 'rom.smc' to 'a.mwl' using 'lm.exe'",
            ),
            (
                Operation::ImportLevel {
                    rom: rom(),
                    mwl: "a.mwl".into(),
                    level: Some(LevelNumber::new(0x1A)),
                },
                "Failed to import level 01A from 'a.mwl' into 'rom.smc' using 'lm.exe'",
            ),
            (
                Operation::ImportLevel {
                    rom: rom(),
                    mwl: "a.mwl".into(),
                    level: None,
                },
                "Failed to import level from 'a.mwl' into 'rom.smc' using 'lm.exe'",
            ),
            (
                Operation::ImportMap16 {
                    rom: rom(),
                    map16: "t.map16".into(),
                    level,
                    location: Some(Map16Location::new(0xA, 0x40)),
                },
                "Failed to import map16 file 't.map16' into level 105 of 'rom.smc' at coordinates X=A, Y=40 using 'lm.exe'",
            ),
            (
                Operation::ImportMap16 {
                    rom: rom(),
                    map16: "t.map16".into(),
                    level,
                    location: None,
                },
                "Failed to import map16 file 't.map16' into level 105 of 'rom.smc' using 'lm.exe'",
            ),
            (
                Operation::ImportCustomPalette {
                    rom: rom(),
                    palette: "p.pal".into(),
                    level,
                },
                "Failed to import custom palette 'p.pal' into level 105 of 'rom.smc' using 'lm.exe'",
            ),
            (
                Operation::ExportSharedPalette {
                    rom: rom(),
                    palette: "p.pal".into(),
                },
                "Failed to export shared palette to 'p.pal' from 'rom.smc' using 'lm.exe'",
            ),
            (
                Operation::ImportSharedPalette {
                    rom: rom(),
                    palette: "p.pal".into(),
                },
                "Failed to import shared palette 'p.pal' into 'rom.smc' using 'lm.exe'",
            ),
            (
                Operation::ExportAllMap16 {
                    rom: rom(),
                    map16: "all.map16".into(),
                },
                "Failed to export all map16 file to 'all.map16' from 'rom.smc' using 'lm.exe'",
            ),
            (
                Operation::ImportAllMap16 {
                    rom: rom(),
                    map16: "all.map16".into(),
                },
                "Failed to import all map16 file 'all.map16' into 'rom.smc' using 'lm.exe'",
            ),
            (
                Operation::ExportMultipleLevels {
                    rom: rom(),
                    directory: "out".into(),
                    file_name_start: "lvl ".to_string(),
                    options: Some(LevelExportFlags::ONLY_MODIFIED),
                },
                "Failed to export multiple levels with prefix 'lvl ' to 'out' from 'rom.smc' with options '1' using 'lm.exe'",
            ),
            (
                Operation::ExportMultipleLevels {
                    rom: rom(),
                    directory: "out".into(),
                    file_name_start: "lvl ".to_string(),
                    options: None,
                },
                "Failed to export multiple levels with prefix 'lvl ' to 'out' from 'rom.smc' using 'lm.exe'",
            ),
            (
                Operation::ImportMultipleLevels {
                    rom: rom(),
                    directory: "in".into(),
                    options: Some(LevelImportFlags::empty()),
                },
                "Failed to import multiple levels from 'in' into 'rom.smc' with options '0' using 'lm.exe'",
            ),
            (
                Operation::ImportMultipleLevels {
                    rom: rom(),
                    directory: "in".into(),
                    options: None,
                },
                "Failed to import multiple levels from 'in' into 'rom.smc' using 'lm.exe'",
            ),
            (
                Operation::ExpandRom {
                    rom: rom(),
                    size: RomSize::Mb6Sa1,
                },
                "Failed to expand 'rom.smc' to 6MB_SA1 using 'lm.exe'",
            ),
            (
                Operation::ChangeCompression {
                    rom: rom(),
                    format: CompressionFormat::LcLz3,
                },
                "Failed to change compression in 'rom.smc' to LC_LZ3 using 'lm.exe'",
            ),
            (
                Operation::TransferGlobalExAnimation {
                    source: "from.smc".into(),
                    destination: "to.smc".into(),
                },
                "Failed to transfer global ExAnimation from 'from.smc' to 'to.smc' using 'lm.exe'",
            ),
            (
                Operation::TransferOverworld {
                    source: "from.smc".into(),
                    destination: "to.smc".into(),
                },
                "Failed to transfer overworld from 'from.smc' to 'to.smc' using 'lm.exe'",
            ),
            (
                Operation::TransferTitleScreen {
                    source: "from.smc".into(),
                    destination: "to.smc".into(),
                },
                "Failed to transfer title screen from 'from.smc' to 'to.smc' using 'lm.exe'",
            ),
            (
                Operation::TransferCredits {
                    source: "from.smc".into(),
                    destination: "to.smc".into(),
                },
                "Failed to transfer credits from 'from.smc' to 'to.smc' using 'lm.exe'",
            ),
            (
                Operation::ExportTitleMoves {
                    rom: rom(),
                    title_moves: "moves.zst".into(),
                },
                "Failed to export title moves from 'rom.smc' to 'moves.zst' using 'lm.exe'",
            ),
            (
                Operation::ImportTitleMoves {
                    rom: rom(),
                    title_moves: "moves.zst".into(),
                },
                "Failed to import title moves from 'moves.zst' into 'rom.smc' using 'lm.exe'",
            ),
        ];

        for (op, expected) in &cases {
            assert_eq!(op.failure_message(Path::new("lm.exe")), *expected, "{op}");
        }
    }

    #[test]
    fn names_are_unique() {
        let ops = [
            Operation::ImportGfx { rom: rom() },
            Operation::ImportExGfx { rom: rom() },
            Operation::ExportGfx { rom: rom() },
            Operation::ExportExGfx { rom: rom() },
        ];
        let mut names: Vec<_> = ops.iter().map(Operation::name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), ops.len());
        assert_eq!(ops[0].to_string(), "import-gfx");
    }
}
