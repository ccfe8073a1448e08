//! Channel classification.
//!
//! A package's originating channel string is tested against a fixed list of
//! markers covering Anaconda's own channels and the common academic/corporate
//! mirrors of them. Matching is case-sensitive substring containment.
//! Channels that contain the preferred channel's name are always excluded,
//! regardless of other matches (`conda.anaconda.org/conda-forge` must not be
//! flagged just because it is hosted on anaconda.org).

/// The channel legacy packages are reinstalled from.
pub const PREFERRED_CHANNEL: &str = "conda-forge";

/// Channel name fragments identifying Anaconda/Miniconda package sources.
///
/// Covers the default channels, Anaconda's repo hosts, and known mirrors.
pub const LEGACY_CHANNEL_MARKERS: &[&str] = &[
    "defaults",
    "repo.anaconda.com",
    "repo.anaconda.cloud",
    "anaconda",
    "anaconda.org",
    "main",
    "free",
    "r",
    "pkgs/main",
    "pkgs/free",
    "pkgs/r",
    "mirror.tuna.tsinghua.edu.cn/anaconda",
    "mirrors.tuna.tsinghua.edu.cn/anaconda",
    "mirrors.ustc.edu.cn/anaconda",
    "mirrors.aliyun.com/anaconda",
    "mirrors.sustech.edu.cn/anaconda",
    "mirrors.bfsu.edu.cn/anaconda",
    "mirrors.hit.edu.cn/anaconda",
    "repo.continuum.io",
    "conda.anaconda.org",
    "mirrors.tuna.tsinghua.edu.cn/miniconda",
    "mirrors.ustc.edu.cn/miniconda",
    "mirrors.aliyun.com/miniconda",
];

/// How a channel string classifies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelKind {
    /// Contains the preferred channel marker; never touched.
    Preferred,
    /// Matches one of the legacy markers; candidate for reinstall.
    Legacy,
    /// Neither preferred nor a known legacy source.
    Other,
}

/// Classify a channel string against the marker lists.
///
/// The preferred marker wins over any legacy marker match.
pub fn classify(channel: &str, preferred: &str) -> ChannelKind {
    if channel.contains(preferred) {
        return ChannelKind::Preferred;
    }
    if LEGACY_CHANNEL_MARKERS.iter().any(|m| channel.contains(m)) {
        ChannelKind::Legacy
    } else {
        ChannelKind::Other
    }
}
