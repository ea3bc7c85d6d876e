use crate::cmd::VersionArgs;
use crate::exit::{CliResult, SUCCESS};

pub fn run(args: VersionArgs) -> CliResult<i32> {
    if !args.extended {
        println!("flowtel {}", env!("CARGO_PKG_VERSION"));
        return Ok(SUCCESS);
    }

    println!("name: flowtel");
    println!("version: {}", env!("CARGO_PKG_VERSION"));
    println!("target_os: {}", std::env::consts::OS);
    println!("target_arch: {}", std::env::consts::ARCH);
    println!(
        "build_target: {}",
        option_env!("FLOWTEL_BUILD_TARGET").unwrap_or("unknown")
    );
    println!(
        "features: ingest={}, analytics={}, cli=true",
        cfg!(feature = "ingest"),
        cfg!(feature = "analytics")
    );

    Ok(SUCCESS)
}
