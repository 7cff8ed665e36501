//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons.

use icondata::Icon;

use crate::config::IconTheme;

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuBookOpen as FilePdf, LuChevronRight as ChevronRight, LuCircleAlert as Error,
        LuCircleCheck as Success, LuDownload as Download, LuFile as File, LuFileText as FileText,
        LuFolder as Folder, LuFolderPlus as FolderPlus, LuHouse as Home, LuImage as FileImage,
        LuInfo as Info, LuLayoutGrid as Grid, LuList as List, LuLoader as Pending,
        LuTrash2 as Trash, LuUpload as Upload, LuX as Close,
    };
}

mod bootstrap {
    pub use icondata::{
        BsCheckCircleFill as Success, BsChevronRight as ChevronRight, BsDownload as Download,
        BsExclamationCircleFill as Error, BsFileEarmark as File,
        BsFileEarmarkImage as FileImage, BsFileEarmarkPdf as FilePdf,
        BsFileEarmarkText as FileText, BsFolderFill as Folder, BsFolderPlus as FolderPlus,
        BsGrid as Grid, BsHourglassSplit as Pending, BsHouseFill as Home,
        BsInfoCircleFill as Info, BsListUl as List, BsTrash as Trash, BsUpload as Upload,
        BsXLg as Close,
    };
}

// =============================================================================
// Icon Constants (selected based on theme)
// =============================================================================

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

themed_icon!(CHEVRON_RIGHT, ChevronRight);
themed_icon!(HOME, Home);
themed_icon!(FOLDER, Folder);
themed_icon!(FOLDER_PLUS, FolderPlus);
themed_icon!(FILE, File);
themed_icon!(FILE_TEXT, FileText);
themed_icon!(FILE_PDF, FilePdf);
themed_icon!(FILE_IMAGE, FileImage);
themed_icon!(LIST, List);
themed_icon!(GRID, Grid);
themed_icon!(UPLOAD, Upload);
themed_icon!(DOWNLOAD, Download);
themed_icon!(TRASH, Trash);
themed_icon!(PENDING, Pending);
themed_icon!(SUCCESS, Success);
themed_icon!(ERROR, Error);
themed_icon!(INFO, Info);
themed_icon!(CLOSE, Close);
