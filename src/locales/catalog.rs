use super::LocaleDefinition;

/// Every locale known to the resolver, in resolution order.
///
/// Order is load-bearing: short-code lookups return the first definition
/// whose short language or short country code matches, so ambiguous short
/// codes resolve deterministically by position in this table.
pub const CATALOG: &[LocaleDefinition] = &[
    LocaleDefinition::new("Albanian", "Albania", "sq", "AL", "sq_AL"),
    LocaleDefinition::new("Arabic", "Algeria", "ar", "DZ", "ar_DZ"),
    LocaleDefinition::new("Arabic", "Bahrain", "ar", "BH", "ar_BH"),
    LocaleDefinition::new("Arabic", "Egypt", "ar", "EG", "ar_EG"),
    LocaleDefinition::new("Arabic", "Iraq", "ar", "IQ", "ar_IQ"),
    LocaleDefinition::new("Arabic", "Jordan", "ar", "JO", "ar_JO"),
    LocaleDefinition::new("Arabic", "Kuwait", "ar", "KW", "ar_KW"),
    LocaleDefinition::new("Arabic", "Lebanon", "ar", "LB", "ar_LB"),
    LocaleDefinition::new("Arabic", "Libya", "ar", "LY", "ar_LY"),
    LocaleDefinition::new("Arabic", "Morocco", "ar", "MA", "ar_MA"),
    LocaleDefinition::new("Arabic", "Oman", "ar", "OM", "ar_OM"),
    LocaleDefinition::new("Arabic", "Qatar", "ar", "QA", "ar_QA"),
    LocaleDefinition::new("Arabic", "Saudi Arabia", "ar", "SA", "ar_SA"),
    LocaleDefinition::new("Arabic", "Sudan", "ar", "SD", "ar_SD"),
    LocaleDefinition::new("Arabic", "Syria", "ar", "SY", "ar_SY"),
    LocaleDefinition::new("Arabic", "Tunisia", "ar", "TN", "ar_TN"),
    LocaleDefinition::new("Arabic", "United Arab Emirates", "ar", "AE", "ar_AE"),
    LocaleDefinition::new("Arabic", "Yemen", "ar", "YE", "ar_YE"),
    LocaleDefinition::new("Belarusian", "Belarus", "be", "BY", "be_BY"),
    LocaleDefinition::new("Bulgarian", "Bulgaria", "bg", "BG", "bg_BG"),
    LocaleDefinition::new("Catalan", "Spain", "ca", "ES", "ca_ES"),
    LocaleDefinition::new("Chinese (Simplified)", "China", "zh", "CN", "zh_CN"),
    LocaleDefinition::new("Chinese (Simplified)", "Singapore", "zh", "SG", "zh_SG"),
    LocaleDefinition::new("Chinese (Traditional)", "Hong Kong", "zh", "HK", "zh_HK"),
    LocaleDefinition::new("Chinese (Traditional)", "Taiwan", "zh", "TW", "zh_TW"),
    LocaleDefinition::new("Croatian", "Croatia", "hr", "HR", "hr_HR"),
    LocaleDefinition::new("Czech", "Czech Republic", "cs", "CZ", "cs_CZ"),
    LocaleDefinition::new("Danish", "Denmark", "da", "DK", "da_DK"),
    LocaleDefinition::new("Dutch", "Belgium", "nl", "BE", "nl_BE"),
    LocaleDefinition::new("Dutch", "Netherlands", "nl", "NL", "nl_NL"),
    LocaleDefinition::new("English", "Australia", "en", "AU", "en_AU"),
    LocaleDefinition::new("English", "Canada", "en", "CA", "en_CA"),
    LocaleDefinition::new("English", "India", "en", "IN", "en_IN"),
    LocaleDefinition::new("English", "Ireland", "en", "IE", "en_IE"),
    LocaleDefinition::new("English", "Malta", "en", "MT", "en_MT"),
    LocaleDefinition::new("English", "New Zealand", "en", "NZ", "en_NZ"),
    LocaleDefinition::new("English", "Philippines", "en", "PH", "en_PH"),
    LocaleDefinition::new("English", "Singapore", "en", "SG", "en_SG"),
    LocaleDefinition::new("English", "South Africa", "en", "ZA", "en_ZA"),
    LocaleDefinition::new("English", "United Kingdom", "en", "GB", "en_GB"),
    LocaleDefinition::new("English", "United States", "en", "US", "en_US"),
    LocaleDefinition::new("Estonian", "Estonia", "et", "EE", "et_EE"),
    LocaleDefinition::new("Finnish", "Finland", "fi", "FI", "fi_FI"),
    LocaleDefinition::new("French", "Belgium", "fr", "BE", "fr_BE"),
    LocaleDefinition::new("French", "Canada", "fr", "CA", "fr_CA"),
    LocaleDefinition::new("French", "France", "fr", "FR", "fr_FR"),
    LocaleDefinition::new("French", "Luxembourg", "fr", "LU", "fr_LU"),
    LocaleDefinition::new("French", "Switzerland", "fr", "CH", "fr_CH"),
    LocaleDefinition::new("German", "Austria", "de", "AT", "de_AT"),
    LocaleDefinition::new("German", "Germany", "de", "DE", "de_DE"),
    LocaleDefinition::new("German", "Luxembourg", "de", "LU", "de_LU"),
    LocaleDefinition::new("German", "Switzerland", "de", "CH", "de_CH"),
    LocaleDefinition::new("Greek", "Cyprus", "el", "CY", "el_CY"),
    LocaleDefinition::new("Greek", "Greece", "el", "GR", "el_GR"),
    LocaleDefinition::new("Hebrew", "Israel", "iw", "IL", "iw_IL"),
    LocaleDefinition::new("Hindi", "India", "hi", "IN", "hi_IN"),
    LocaleDefinition::new("Hungarian", "Hungary", "hu", "HU", "hu_HU"),
    LocaleDefinition::new("Icelandic", "Iceland", "is", "IS", "is_IS"),
    LocaleDefinition::new("Indonesian", "Indonesia", "in", "ID", "in_ID"),
    LocaleDefinition::new("Irish", "Ireland", "ga", "IE", "ga_IE"),
    LocaleDefinition::new("Italian", "Italy", "it", "IT", "it_IT"),
    LocaleDefinition::new("Italian", "Switzerland", "it", "CH", "it_CH"),
    LocaleDefinition::new("Japanese (Gregorian calendar)", "Japan", "ja", "JP", "ja_JP"),
    LocaleDefinition::new("Japanese (Imperial calendar)", "Japan", "ja_JP", "JP", "ja_JP_JP"),
    LocaleDefinition::new("Korean", "South Korea", "ko", "KR", "ko_KR"),
    LocaleDefinition::new("Latvian", "Latvia", "lv", "LV", "lv_LV"),
    LocaleDefinition::new("Lithuanian", "Lithuania", "lt", "LT", "lt_LT"),
    LocaleDefinition::new("Macedonian", "Macedonia", "mk", "MK", "mk_MK"),
    LocaleDefinition::new("Malay", "Malaysia", "ms", "MY", "ms_MY"),
    LocaleDefinition::new("Maltese", "Malta", "mt", "MT", "mt_MT"),
    LocaleDefinition::new("Norwegian (Bokmål)", "Norway", "no", "NO", "no_NO"),
    LocaleDefinition::new("Norwegian (Nynorsk)", "Norway", "no_NO", "NY", "no_NO_NY"),
    LocaleDefinition::new("Polish", "Poland", "pl", "PL", "pl_PL"),
    LocaleDefinition::new("Portuguese", "Brazil", "pt", "BR", "pt_BR"),
    LocaleDefinition::new("Portuguese", "Portugal", "pt", "PT", "pt_PT"),
    LocaleDefinition::new("Romanian", "Romania", "ro", "RO", "ro_RO"),
    LocaleDefinition::new("Russian", "Russia", "ru", "RU", "ru_RU"),
    LocaleDefinition::new("Serbian (Cyrillic)", "Bosnia and Herzegovina", "sr", "BA", "sr_BA"),
    LocaleDefinition::new("Serbian (Cyrillic)", "Montenegro", "sr", "ME", "sr_ME"),
    LocaleDefinition::new("Serbian (Cyrillic)", "Serbia", "sr", "RS", "sr_RS"),
    LocaleDefinition::new("Serbian (Latin)", "Bosnia and Herzegovina", "sr_Latn", "BA", "sr_Latn_BA"),
    LocaleDefinition::new("Serbian (Latin)", "Montenegro", "sr_Latn", "ME", "sr_Latn_ME"),
    LocaleDefinition::new("Serbian (Latin)", "Serbia", "sr_Latn", "RS", "sr_Latn_RS"),
    LocaleDefinition::new("Slovak", "Slovakia", "sk", "SK", "sk_SK"),
    LocaleDefinition::new("Slovenian", "Slovenia", "sl", "SI", "sl_SI"),
    LocaleDefinition::new("Spanish", "Argentina", "es", "AR", "es_AR"),
    LocaleDefinition::new("Spanish", "Bolivia", "es", "BO", "es_BO"),
    LocaleDefinition::new("Spanish", "Chile", "es", "CL", "es_CL"),
    LocaleDefinition::new("Spanish", "Colombia", "es", "CO", "es_CO"),
    LocaleDefinition::new("Spanish", "Costa Rica", "es", "CR", "es_CR"),
    LocaleDefinition::new("Spanish", "Dominican Republic", "es", "DO", "es_DO"),
    LocaleDefinition::new("Spanish", "Ecuador", "es", "EC", "es_EC"),
    LocaleDefinition::new("Spanish", "El Salvador", "es", "SV", "es_SV"),
    LocaleDefinition::new("Spanish", "Guatemala", "es", "GT", "es_GT"),
    LocaleDefinition::new("Spanish", "Honduras", "es", "HN", "es_HN"),
    LocaleDefinition::new("Spanish", "Mexico", "es", "MX", "es_MX"),
    LocaleDefinition::new("Spanish", "Nicaragua", "es", "NI", "es_NI"),
    LocaleDefinition::new("Spanish", "Panama", "es", "PA", "es_PA"),
    LocaleDefinition::new("Spanish", "Paraguay", "es", "PY", "es_PY"),
    LocaleDefinition::new("Spanish", "Peru", "es", "PE", "es_PE"),
    LocaleDefinition::new("Spanish", "Puerto Rico", "es", "PR", "es_PR"),
    LocaleDefinition::new("Spanish", "Spain", "es", "ES", "es_ES"),
    LocaleDefinition::new("Spanish", "United States", "es", "US", "es_US"),
    LocaleDefinition::new("Spanish", "Uruguay", "es", "UY", "es_UY"),
    LocaleDefinition::new("Spanish", "Venezuela", "es", "VE", "es_VE"),
    LocaleDefinition::new("Swedish", "Sweden", "sv", "SE", "sv_SE"),
    LocaleDefinition::new("Thai (Western digits)", "Thailand", "th", "TH", "th_TH"),
    LocaleDefinition::new("Thai (Thai digits)", "Thailand", "th_TH", "TH", "th_TH_TH"),
    LocaleDefinition::new("Turkish", "Turkey", "tr", "TR", "tr_TR"),
    LocaleDefinition::new("Ukrainian", "Ukraine", "uk", "UA", "uk_UA"),
    LocaleDefinition::new("Vietnamese", "Vietnam", "vi", "VN", "vi_VN"),
];
