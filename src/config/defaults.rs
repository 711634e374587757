//! Source and output tree layout
//!
//! All paths are relative to the project root (the directory qtforge is
//! invoked from).

/// Qt source checkout
pub const QT_SOURCE_DIR: &str = "qt";

/// ICU source checkout
pub const ICU_SOURCE_DIR: &str = "thirdparty/icu/src";

/// OpenSSL source checkout
pub const OPENSSL_SOURCE_DIR: &str = "thirdparty/openssl/src";

/// Intermediate dependency install trees, per platform
pub const BUILD_DIR: &str = "build";

/// Final SDK install tree, per platform
pub const INSTALL_DIR: &str = "install";

/// Subdirectory of the per-platform build dir holding the ICU install
pub const ICU_INSTALL_SUBDIR: &str = "icu";

/// Subdirectory of the per-platform build dir holding the OpenSSL install
pub const OPENSSL_INSTALL_SUBDIR: &str = "openssl";

/// Runtime binary subdirectory of an install tree
pub const BIN_SUBDIR: &str = "bin";

/// Header subdirectory of an install tree
pub const INCLUDE_SUBDIR: &str = "include";

/// Library subdirectory of an install tree
pub const LIB_SUBDIR: &str = "lib";

/// Companion configuration file copied next to the installed Qt binaries
pub const QT_CONF_FILE: &str = "qt.conf";

/// Marker left behind by a completed Qt configure run
pub const CONFIGURE_MARKER: &str = "Makefile";
