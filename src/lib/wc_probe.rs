//! Runtime capability probe for scalable vectors.
//!
//! One mechanism per platform: the std feature-detection macro (HWCAP on
//! Linux, sysctl on Apple) for the SVE verdict, and `prctl(PR_SVE_GET_VL)` on
//! Linux for the vector length. Unknown platforms report unsupported.

use log::debug;

/// Whether the CPU advertises the scalable vector extension.
///
/// Pure query, safe to call from any thread.
pub fn probe_capability() -> bool {
    let supported = sve_detected();
    debug!("SVE capability probe: supported={supported}");
    supported
}

#[cfg(target_arch = "aarch64")]
fn sve_detected() -> bool {
    std::arch::is_aarch64_feature_detected!("sve")
}

#[cfg(not(target_arch = "aarch64"))]
fn sve_detected() -> bool {
    false
}

/// Current SVE vector length in bytes, as reported by the kernel
#[cfg(all(target_arch = "aarch64", target_os = "linux"))]
pub(crate) fn native_vector_bytes() -> Option<usize> {
    // <linux/prctl.h>
    const PR_SVE_GET_VL: libc::c_int = 51;
    const PR_SVE_VL_LEN_MASK: libc::c_int = 0xffff;

    // SAFETY: PR_SVE_GET_VL takes no further arguments and only reads thread state
    let ret = unsafe { libc::prctl(PR_SVE_GET_VL) };
    if ret < 0 {
        debug!("PR_SVE_GET_VL failed: {}", std::io::Error::last_os_error());
        return None;
    }
    usize::try_from(ret & PR_SVE_VL_LEN_MASK).ok()
}

#[cfg(not(all(target_arch = "aarch64", target_os = "linux")))]
pub(crate) fn native_vector_bytes() -> Option<usize> {
    None
}
