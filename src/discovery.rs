//! Best-effort default email template from the local network.
//!
//! The host name of the first address on a network interface is looked up
//! through reverse DNS and its domain becomes `git@<domain>`.
//!
//! # Platform Support
//!
//! - Unix: Uses `libc::getifaddrs` and `libc::getnameinfo`
//! - Other platforms: Always unavailable, `PAIR_EMAIL` has to be set

use tracing::debug;

use crate::error::AppError;

/// Local part of derived templates
const TEMPLATE_LOCAL: &str = "git";

/// Derives a template like `git@example.com` from the reverse DNS names of `interface`
pub fn default_email_template(interface: &str) -> Result<String, AppError> {
    let dns_names = reverse_dns_names(interface)
        .map_err(|e| AppError::TemplateUnavailable(format!("{interface}: {e}")))?;
    debug!(interface, ?dns_names, "reverse DNS names");

    template_from_dns_names(&dns_names).ok_or_else(|| {
        AppError::TemplateUnavailable(format!(
            "no fully-qualified domain name found for {interface}"
        ))
    })
}

/// Picks the domain of the first name with at least two labels
///
/// `host.corp.example.com.` gives `git@example.com`.
pub fn template_from_dns_names(dns_names: &[String]) -> Option<String> {
    dns_names.iter().find_map(|dns_name| {
        let labels: Vec<&str> = dns_name.trim_end_matches('.').split('.').collect();
        match labels.as_slice() {
            [.., domain, tld] if !domain.is_empty() && !tld.is_empty() => {
                Some(format!("{TEMPLATE_LOCAL}@{domain}.{tld}"))
            }
            _ => None,
        }
    })
}

/// Looks up the host name of the first address on `interface` that has one
#[cfg(target_family = "unix")]
fn reverse_dns_names(interface: &str) -> std::io::Result<Vec<String>> {
    use std::{ffi::CStr, mem, ptr};

    // NI_MAXHOST from <netdb.h>
    const MAX_HOST_LEN: usize = 1025;

    let mut addrs: *mut libc::ifaddrs = ptr::null_mut();
    // SAFETY: getifaddrs() fills addrs with a linked list that is released below
    // with freeifaddrs().
    if unsafe { libc::getifaddrs(&mut addrs) } != 0 {
        return Err(std::io::Error::last_os_error());
    }

    let mut found = false;
    let mut dns_names = Vec::new();
    let mut cursor = addrs;
    while !cursor.is_null() {
        // SAFETY: cursor is a non-null node of the list returned by getifaddrs().
        let entry = unsafe { &*cursor };
        cursor = entry.ifa_next;

        // SAFETY: ifa_name is a valid null-terminated C string for every node.
        let name = unsafe { CStr::from_ptr(entry.ifa_name) };
        if name.to_bytes() != interface.as_bytes() {
            continue;
        }
        found = true;
        if entry.ifa_addr.is_null() {
            continue;
        }

        // SAFETY: ifa_addr was checked to be non-null.
        let family = i32::from(unsafe { (*entry.ifa_addr).sa_family });
        let addr_len = match family {
            libc::AF_INET => mem::size_of::<libc::sockaddr_in>(),
            libc::AF_INET6 => mem::size_of::<libc::sockaddr_in6>(),
            _ => continue,
        };

        let mut host = [0 as libc::c_char; MAX_HOST_LEN];
        // SAFETY: ifa_addr points to a socket address of addr_len bytes for its
        // family and host is a writable buffer of the advertised length.
        let result = unsafe {
            libc::getnameinfo(
                entry.ifa_addr,
                addr_len as libc::socklen_t,
                host.as_mut_ptr(),
                host.len() as libc::socklen_t,
                ptr::null_mut(),
                0,
                libc::NI_NAMEREQD,
            )
        };
        if result == 0 {
            // SAFETY: getnameinfo() wrote a null-terminated string into host.
            let dns_name = unsafe { CStr::from_ptr(host.as_ptr()) };
            dns_names.push(dns_name.to_string_lossy().into_owned());
            break;
        }
    }

    // SAFETY: addrs came from a successful getifaddrs() call and is freed once.
    unsafe { libc::freeifaddrs(addrs) };

    if !found {
        return Err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "no such network interface",
        ));
    }
    Ok(dns_names)
}

#[cfg(not(target_family = "unix"))]
fn reverse_dns_names(_interface: &str) -> std::io::Result<Vec<String>> {
    Err(std::io::Error::new(
        std::io::ErrorKind::Unsupported,
        "reverse DNS lookup currently only supported on Unix systems",
    ))
}
