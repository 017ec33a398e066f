//! Built-in cybersecurity awareness content.

use super::{CatalogDef, MenuChoice, TopicDef};

const MENU_TEXT: &str = "\n1. Password Safety\n\
2. Phishing & Scams\n\
3. Safe Browsing\n\
4. VPNs\n\
5. Privacy\n\
6. Take Quiz\n\
Type 1-6, or just ask naturally. Type 'help' to see this menu again.\n";

const PASSWORD_ADVICE: &[&[&str]] = &[
    &[
        "🌟 Use long, unique and strong passwords for each site.",
        "📛 Avoid using the same password for multiple sites.",
        "🔐 Use a reputable password manager to store and generate strong passwords.",
    ],
    &[
        "🔑 Keep every password unique and 12+ chars.",
        "💡 Mix upper/lowercase letters, numbers, and symbols.",
        "🔒 One account hacked ≠ all accounts hacked.",
        "✅ A password manager remembers the complexity for you.",
    ],
    &[
        "🔏 Think of your password like a toothbrush: don't share it and change it regularly!",
        "🧩 Use passphrases made of unrelated words for easier memorization and strong security.",
        "🎯 Avoid common words and predictable substitutions like 'P@ssw0rd'.",
        "🔑 Consider enabling two-factor authentication wherever possible.",
        "💾 Back up your passwords securely in case you forget them.",
    ],
];

const PHISHING_ADVICE: &[&[&str]] = &[
    &[
        "⚠️ Be cautious with urgent or unexpected emails.",
        "✅ Verify the sender's email address carefully.",
        "📎 Never download attachments from unknown sources.",
    ],
    &[
        "⚠️ Always check the sender's email carefully before clicking.",
        "🚫 Don't trust links asking for personal info unexpectedly.",
        "🔍 Hover over links to see their true destination.",
        "📞 When in doubt, call the company directly using a known number.",
    ],
    &[
        "🚨 Phishing emails often create a sense of urgency, so pause and think before acting.",
        "🔬 Look out for spelling mistakes or odd phrasing; scammers often slip up.",
        "📧 Legit companies usually don't ask for sensitive info via email.",
        "💡 Use browser tools or email filters to help detect phishing attempts.",
        "⚔️ Report suspicious emails to your IT or security team to protect others.",
    ],
];

const BROWSING_ADVICE: &[&[&str]] = &[
    &[
        "🚀 Always use HTTPS websites.",
        "💬 Avoid clicking pop-ups and suspicious ads.",
        "🧑‍💻 Use a VPN when browsing on public Wi-Fi.",
    ],
    &[
        "🌐 Prefer websites that start with HTTPS for secure browsing.",
        "❌ Avoid clicking on suspicious pop-ups or ads.",
        "🔐 Use a VPN on public Wi-Fi to encrypt your traffic.",
        "🛡️ Keep your browser updated to protect against vulnerabilities.",
    ],
    &[
        "🛑 Don't ignore browser warnings about unsafe websites.",
        "👓 Review website URLs carefully and watch for slight misspellings or odd domains.",
        "💼 Use separate browsers or profiles for personal and sensitive browsing.",
        "🔄 Regularly update your privacy settings and clear your browsing history.",
        "🌟 Bookmark frequently used sites to avoid mistyping URLs.",
    ],
];

const VPN_ADVICE: &[&[&str]] = &[
    &[
        "🔒 Use a reliable VPN to encrypt your internet traffic.",
        "🌍 VPNs help mask your IP address and protect your location.",
        "⚠️ Avoid free VPNs as they may log your data or inject ads.",
        "✅ Choose a VPN with a strict no-logs policy.",
        "🔄 Use VPNs especially on public Wi-Fi networks to stay safe.",
    ],
    &[
        "🛡️ VPNs protect your privacy and help bypass censorship.",
        "📶 VPNs can slightly slow your internet connection due to encryption.",
        "⚙️ Configure your VPN to start automatically for continuous protection.",
        "🔒 Combine VPN use with secure browsers and HTTPS sites for best security.",
    ],
];

const PRIVACY_ADVICE: &[&[&str]] = &[
    &[
        "🔐 Review and adjust your privacy settings on social media.",
        "👀 Be cautious about what personal information you share online.",
        "📱 Limit app permissions to only what's necessary.",
        "🕵️‍♂️ Use privacy-focused browsers and search engines.",
        "🚫 Avoid oversharing to reduce risks of identity theft.",
    ],
    &[
        "🔎 Regularly check and delete old accounts you no longer use.",
        "🔒 Use strong passwords and 2FA to protect your accounts.",
        "📢 Be aware of data collection policies before installing apps.",
        "🧹 Clear cookies and cache frequently to protect your browsing privacy.",
    ],
];

const SENTIMENTS: &[(&str, &str)] = &[
    ("worried", "😟 It's okay to feel that way. Cybersecurity can be scary, but I'm here to help you through it."),
    ("anxious", "😟 You're not alone, security concerns can be overwhelming. Let's take it one step at a time."),
    ("nervous", "😟 Feeling nervous is normal. I've got your back, ask anything, anytime."),
    ("scared", "😟 Cyber threats can sound intense, but don't worry. You're in a safe place to learn and protect yourself online."),
    ("confused", "🤔 I can help clarify! Ask me anything about passwords, phishing, or safe browsing."),
    ("unclear", "🤔 Let's walk through it together. What part can I help explain better?"),
    ("lost", "🤔 That's totally fine. Let me know where you're stuck and I'll help guide you."),
    ("unsure", "🤔 Uncertainty is part of learning. I can simplify things, just ask!"),
    ("frustrated", "😣 It's frustrating when things don't make sense. Let's break it down together."),
    ("annoyed", "😣 I hear you. Let's sort it out together and turn this into progress."),
    ("overwhelmed", "😣 Cybersecurity can feel like a lot, but we'll take it one step at a time."),
    ("fed up", "😣 Don't give up. Sometimes all it takes is a fresh perspective. Let's tackle it."),
    ("curious", "🧐 I love curiosity! Let's explore cybersecurity tips you might find interesting."),
    ("wondering", "🧐 Great question! Ask me anything you've been wondering about."),
    ("thinking", "🧐 Thinking ahead is smart. What would you like to know more about?"),
];

const STATUS_PHRASES: &[(&str, &[&str])] = &[
    (
        "how are you",
        &[
            "I'm just a bunch of code, but I'm functioning well! 😄",
            "All systems operational! How can I assist you today?",
            "Feeling cyber-secure as always. Thanks for asking!",
            "I'm doing great, thanks! Ready to help you stay safe online.",
        ],
    ),
    (
        "what's up",
        &[
            "Not much, just analyzing threats and giving advice. How about you?",
            "Same old, same old: protecting data and giving tips!",
            "All good here! Just waiting to chat about cybersecurity. 🔐",
        ],
    ),
    (
        "how's it going",
        &[
            "Going well on the digital front! How can I help?",
            "No malware in sight, it's a good day!",
            "All smooth sailing in cyberspace. What brings you here today?",
        ],
    ),
];

const THANKS_RESPONSES: &[&str] = &[
    "You're welcome! 😊 Stay safe online.",
    "Anytime! Let me know if there's anything else I can help with.",
    "Happy to help! 🔐",
    "No problem at all. Cyber safety is a team effort!",
];

const GRATITUDE: &[&str] = &[
    "thanks",
    "thank you",
    "thank you very much",
    "thx",
    "ty",
    "thanks a lot",
];

const GRATITUDE_PREFIXES: &[&str] = &["thanks ", "thank you"];

const AFFIRMATIVE: &[&str] = &[
    "yes",
    "yeah",
    "yep",
    "yup",
    "sure",
    "ok",
    "okay",
    "please",
    "of course",
    "definitely",
    "absolutely",
];

const NEGATIVE: &[&str] = &["no", "nah", "nope", "not really", "not now"];

const ACTIVITY_TRIGGERS: &[&str] = &[
    "activity log",
    "show activity",
    "recent activity",
    "recent actions",
    "what have you done",
    "show log",
];

fn topic(key: &str, label: &str, pattern: &str, advice: &[&[&str]], nudge: &str) -> TopicDef {
    TopicDef {
        key: key.to_string(),
        label: label.to_string(),
        pattern: pattern.to_string(),
        responses: advice.iter().map(|lines| lines.join("\n")).collect(),
        nudges: vec![nudge.to_string()],
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub(super) fn definition() -> CatalogDef {
    let topics = vec![
        topic(
            "password",
            "passwords",
            r"\b(password|credentials|login|pass key)\b",
            PASSWORD_ADVICE,
            "🔁 You've brought up passwords a few times, and it's great that you're focused on this. Here's another tip:",
        ),
        topic(
            "phishing",
            "phishing and scams",
            r"\b(phishing|scam|fake email|fraud)\b",
            PHISHING_ADVICE,
            "🔁 It's clear phishing and scams matter to you. Staying vigilant is smart, here's more advice:",
        ),
        topic(
            "safe_browsing",
            "safe browsing",
            r"\b(safebrowsing|https|browsing|internet|safe browsing|secure connection)\b",
            BROWSING_ADVICE,
            "🔁 You've revisited browsing safety a lot, and it's worth mastering. Check this out:",
        ),
        topic(
            "vpn",
            "VPNs",
            r"\b(vpn|virtual private network)\b",
            VPN_ADVICE,
            "🔁 You're really digging into VPNs, that's awesome. One more set of tips for the road:",
        ),
        topic(
            "privacy",
            "privacy",
            r"\b(privacy|personal info|data protection|private)\b",
            PRIVACY_ADVICE,
            "🔁 You've asked about privacy multiple times, so here's another set of advice:",
        ),
    ];

    let menu_choices = vec![
        ("1".to_string(), MenuChoice::Topic("password".to_string())),
        ("2".to_string(), MenuChoice::Topic("phishing".to_string())),
        ("3".to_string(), MenuChoice::Topic("safe_browsing".to_string())),
        ("4".to_string(), MenuChoice::Topic("vpn".to_string())),
        ("5".to_string(), MenuChoice::Topic("privacy".to_string())),
        ("6".to_string(), MenuChoice::Quiz),
    ];

    CatalogDef {
        topics,
        sentiments: SENTIMENTS
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect(),
        status_phrases: STATUS_PHRASES
            .iter()
            .map(|(phrase, variants)| (phrase.to_string(), strings(variants)))
            .collect(),
        menu_text: MENU_TEXT.to_string(),
        menu_choices,
        affirmative: strings(AFFIRMATIVE),
        negative: strings(NEGATIVE),
        gratitude: strings(GRATITUDE),
        gratitude_prefixes: strings(GRATITUDE_PREFIXES),
        thanks_responses: strings(THANKS_RESPONSES),
        activity_triggers: strings(ACTIVITY_TRIGGERS),
    }
}
