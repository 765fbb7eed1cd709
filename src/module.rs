use log::info;
use spin::Once;

/// initcall stages, in boot order.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum InitLevel {
    Early,
    Core,
    PostCore,
    Arch,
    Subsys,
    Fs,
    Device,
    Late,
}

#[derive(Copy, Clone, Debug)]
pub struct ModuleInfo {
    pub name: &'static str,
    pub author: &'static str,
    pub description: &'static str,
    pub license: &'static str,
    pub init_level: InitLevel,
    pub init: fn() -> i32,
}

pub const MODULE_INFO: ModuleInfo = ModuleInfo {
    name: crate::params::MODULE_NAME,
    author: "Ivan Rusanov <ivan.b.rusanov@gmail.com",
    description: "PROTON GPU Init Driver",
    license: "GPL",
    init_level: InitLevel::Arch,
    init: proton_control_init,
};

static INIT: Once<i32> = Once::new();

/// Nothing to program; the tunables are live from the first load.
pub fn proton_control_init() -> i32 {
    0
}

/// Run the init hook. Only the first call executes it.
pub fn register() -> i32 {
    *INIT.call_once(|| {
        let ret = (MODULE_INFO.init)();
        info!(
            "{}: {} loaded at {:?} initcall, ret={}",
            MODULE_INFO.name, MODULE_INFO.description, MODULE_INFO.init_level, ret
        );
        ret
    })
}

pub fn is_initialized() -> bool {
    INIT.is_completed()
}
