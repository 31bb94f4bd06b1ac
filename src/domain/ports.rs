use crate::config::grimoire::GrimoireConfig;
use crate::utils::error::Result;
use std::io::Write;

/// 一個可獨立執行的示範練習，示範輸出寫入 `out`
pub trait Exercise {
    fn name(&self) -> &'static str;
    fn run(&self, grimoire: &GrimoireConfig, out: &mut dyn Write) -> Result<()>;
}
