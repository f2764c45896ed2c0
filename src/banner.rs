//! 启动横幅与版本信息（输出到 stderr，不干扰结果管道）

/// 当前版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

const BANNER: &str = r"
                ____               _         ____
   _____ _____ / __/____ _ _   __ (_)____   / __/____
  / ___// ___// /_ / __  /| | / // // __ \ / /_ / __ \
 / /   (__  )/ __// /_/ / | |/ // // / / // __// /_/ /
/_/   /____//_/   \__,_/  |___//_//_/ /_//_/   \____/
";

/// 版本行
pub fn version_line() -> String {
    format!("Current rsfavinfo version v{}", VERSION)
}

pub fn print_version() {
    eprintln!("{}", version_line());
}

pub fn print_banner() {
    eprintln!("{}\n{:>56}\n", BANNER, version_line());
}
