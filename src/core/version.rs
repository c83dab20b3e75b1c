use std::process::{Command, Stdio};

/// Helper queried for the HTTP transport's build information.
pub const HTTP_HELPER: &[&str] = &["git", "remote-https", "--build-info"];

/// Version string of this tool and the libgit2 it is linked against.
pub fn client_version() -> String {
    let libgit2 = git2::Version::get();
    let (major, minor, rev) = libgit2.libgit2_version();
    format!(
        "git-bugreport version {} (libgit2 {major}.{minor}.{rev})",
        env!("CARGO_PKG_VERSION")
    )
}

#[cfg(unix)]
fn sys_uname() -> std::io::Result<libc::utsname> {
    // SAFETY: utsname is plain old data (all zeroes is valid) and uname only
    // writes into the struct it is handed.
    let mut uts: libc::utsname = unsafe { std::mem::zeroed() };
    if unsafe { libc::uname(&mut uts) } != 0 {
        return Err(std::io::Error::last_os_error());
    }
    Ok(uts)
}

#[cfg(unix)]
pub(crate) fn utsname_field(raw: &[libc::c_char]) -> String {
    let bytes: Vec<u8> = raw
        .iter()
        .take_while(|&&c| c != 0)
        .map(|&c| c as u8)
        .collect();
    String::from_utf8_lossy(&bytes).into_owned()
}

/// `uname`-style identification of the running kernel and machine.
#[cfg(unix)]
pub fn uname_info() -> String {
    match sys_uname() {
        Ok(uts) => format!(
            "uname: {} {} {} {} {}\n",
            utsname_field(&uts.sysname),
            utsname_field(&uts.nodename),
            utsname_field(&uts.release),
            utsname_field(&uts.version),
            utsname_field(&uts.machine)
        ),
        Err(err) => {
            tracing::warn!("uname() failed: {err}");
            format!(
                "uname() failed with error '{}' (code {})\n",
                err,
                err.raw_os_error().unwrap_or(-1)
            )
        }
    }
}

#[cfg(not(unix))]
pub fn uname_info() -> String {
    format!(
        "uname: {} {}\n",
        std::env::consts::OS,
        std::env::consts::ARCH
    )
}

/// Version of the C library the process is running against.
#[cfg(all(target_os = "linux", target_env = "gnu"))]
pub fn libc_info() -> String {
    // SAFETY: glibc returns a pointer to a static NUL-terminated string.
    let version = unsafe { std::ffi::CStr::from_ptr(libc::gnu_get_libc_version()) };
    format!("glibc: {}", version.to_string_lossy())
}

#[cfg(not(all(target_os = "linux", target_env = "gnu")))]
pub fn libc_info() -> String {
    "no libc information available".to_string()
}

/// Runs `argv` and returns its trimmed standard output.
///
/// A helper that cannot be spawned, exits unsuccessfully, or prints nothing is
/// reported as not supported.
pub fn helper_version(argv: &[&str]) -> String {
    let unsupported = format!("'{}' not supported\n", argv.join(" "));
    let Some((program, args)) = argv.split_first() else {
        return unsupported;
    };

    let output = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .output();

    match output {
        Ok(output) if output.status.success() && !output.stdout.is_empty() => {
            let mut text = String::from_utf8_lossy(&output.stdout).trim_end().to_string();
            text.push('\n');
            text
        }
        Ok(output) => {
            tracing::warn!("{} exited with {}", argv.join(" "), output.status);
            unsupported
        }
        Err(err) => {
            tracing::warn!("could not run {}: {err}", argv.join(" "));
            unsupported
        }
    }
}

/// Collects the "System Info" section.
///
/// `shell` is the value of `$SHELL`, passed in so callers decide where the
/// environment comes from.
pub fn system_info(shell: Option<&str>, http_helper: &[&str]) -> String {
    tracing::debug!("collecting system info");
    let mut out = String::new();

    out.push_str("git-bugreport version:\n");
    out.push_str(&client_version());
    out.push('\n');
    out.push_str(&format!("cpu: {}\n", std::env::consts::ARCH));
    out.push_str(&format!(
        "sizeof-long: {}\n",
        std::mem::size_of::<libc::c_long>()
    ));
    out.push_str(&format!("sizeof-size_t: {}\n", std::mem::size_of::<usize>()));
    out.push_str(&uname_info());
    out.push_str(&format!("libc info: {}\n", libc_info()));
    out.push_str(&format!(
        "$SHELL (typically, interactive shell): {}\n",
        shell.unwrap_or("<unset>")
    ));
    out.push_str(&helper_version(http_helper));
    out
}
