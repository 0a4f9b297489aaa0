//! Built-in blocklist used when no persisted rule file is available.

/// Well-known advertising and tracking domains, exact names and wildcard
/// variants.
pub const DEFAULT_BLOCKED_DOMAINS: &[&str] = &[
    "doubleclick.net",
    "*.doubleclick.net",
    "googleadservices.com",
    "googlesyndication.com",
    "*.googlesyndication.com",
    "google-analytics.com",
    "*.google-analytics.com",
    "googletagmanager.com",
    "googletagservices.com",
    "adservice.google.com",
    "pagead2.googlesyndication.com",
    "ads.google.com",
    "analytics.google.com",
    "app-measurement.com",
    "crashlytics.com",
    "facebook.net",
    "connect.facebook.net",
    "graph.facebook.com",
    "an.facebook.com",
    "pixel.facebook.com",
    "ads.twitter.com",
    "analytics.twitter.com",
    "static.ads-twitter.com",
    "ads.linkedin.com",
    "px.ads.linkedin.com",
    "ads.yahoo.com",
    "analytics.yahoo.com",
    "advertising.com",
    "adnxs.com",
    "*.adnxs.com",
    "adsrvr.org",
    "*.adsrvr.org",
    "amazon-adsystem.com",
    "*.amazon-adsystem.com",
    "criteo.com",
    "*.criteo.com",
    "criteo.net",
    "taboola.com",
    "*.taboola.com",
    "outbrain.com",
    "*.outbrain.com",
    "scorecardresearch.com",
    "*.scorecardresearch.com",
    "quantserve.com",
    "*.quantserve.com",
    "moatads.com",
    "*.moatads.com",
    "rubiconproject.com",
    "pubmatic.com",
    "openx.net",
    "casalemedia.com",
    "adcolony.com",
    "applovin.com",
    "*.applovin.com",
    "unityads.unity3d.com",
    "chartboost.com",
    "inmobi.com",
    "mopub.com",
    "vungle.com",
    "branch.io",
    "app.adjust.com",
    "adjust.com",
    "appsflyer.com",
    "*.appsflyer.com",
    "kochava.com",
    "mixpanel.com",
    "api.mixpanel.com",
    "amplitude.com",
    "api.amplitude.com",
    "segment.io",
    "api.segment.io",
    "hotjar.com",
    "*.hotjar.com",
    "newrelic.com",
    "bam.nr-data.net",
    "flurry.com",
    "data.flurry.com",
    "smartadserver.com",
    "zedo.com",
    "media.net",
    "adform.net",
    "bidswitch.net",
    "mathtag.com",
    "serving-sys.com",
    "tapad.com",
    "2mdn.net",
    "admob.com",
    "*.admob.com",
];
