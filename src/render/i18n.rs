use super::Language;

/// Report chrome for one language.
#[derive(Debug)]
pub struct Strings {
    pub email_title: &'static str,
    pub url_title: &'static str,
    pub analysis_results: &'static str,
    pub phishing_score: &'static str,
    pub detected_sender: &'static str,
    pub sender_not_found: &'static str,
    pub indicators: &'static str,
    pub no_indicators: &'static str,
    pub safe_sender: &'static str,
    pub no_content_warning: &'static str,
    pub url_warning: &'static str,
    pub keyword_detected: &'static str,
    pub tld_detected: &'static str,
    pub heuristics_warning: &'static str,
    pub url_safe: &'static str,
    pub url_suspicious: &'static str,
}

static EN: Strings = Strings {
    email_title: "AI Gmail Phishing Detector",
    url_title: "URL Phishing Checker",
    analysis_results: "Analysis Results",
    phishing_score: "Phishing Score",
    detected_sender: "Detected Sender",
    sender_not_found: "Not Found",
    indicators: "Detected Phishing Indicators:",
    no_indicators: "No obvious phishing indicators detected. This email appears safe.",
    safe_sender: "Sender appears to be a legitimate address with no suspicious verification requests detected.",
    no_content_warning: "Please paste some email content to analyze.",
    url_warning: "Please enter a URL to check.",
    keyword_detected: "🚩 Suspicious Keyword Detected in URL: This URL contains a sensitive keyword like 'login' or 'bank'.",
    tld_detected: "🚩 Suspicious Top-Level Domain Detected:",
    heuristics_warning: "⚠ This URL is flagged by our basic heuristics. Please proceed with caution.",
    url_safe: "✅ The URL appears to be safe to visit!",
    url_suspicious: "🚨 This URL is highly suspicious – possible phishing detected!",
};

static HI: Strings = Strings {
    email_title: "एआई जीमेल फ़िशिंग डिटेक्टर",
    url_title: "यूआरएल फ़िशिंग चेकर",
    analysis_results: "विश्लेषण परिणाम",
    phishing_score: "फ़िशिंग स्कोर",
    detected_sender: "पता लगाया गया प्रेषक",
    sender_not_found: "नहीं मिला",
    indicators: "पता लगाए गए फ़िशिंग संकेतक:",
    no_indicators: "कोई स्पष्ट फ़िशिंग संकेतक नहीं मिले। यह ईमेल सुरक्षित प्रतीत होता है।",
    safe_sender: "प्रेषक एक वैध पता प्रतीत होता है।",
    no_content_warning: "कृपया विश्लेषण के लिए कुछ ईमेल सामग्री पेस्ट करें।",
    url_warning: "कृपया जांचने के लिए एक यूआरएल दर्ज करें।",
    keyword_detected: "🚩 संदिग्ध कीवर्ड पाया गया: इस यूआरएल में 'login' या 'bank' जैसे संवेदनशील शब्द हैं।",
    tld_detected: "🚩 संदिग्ध शीर्ष-स्तरीय डोमेन पाया गया:",
    heuristics_warning: "⚠ इस यूआरएल को हमारे सरल नियमों द्वारा चिह्नित किया गया है। सावधानी से आगे बढ़ें।",
    url_safe: "✅ यह यूआरएल सुरक्षित प्रतीत होता है!",
    url_suspicious: "🚨 यह यूआरएल संदिग्ध है - संभवतः फ़िशिंग!",
};

static TE: Strings = Strings {
    email_title: "AI Gmail ఫిషింగ్ డిటెక్టర్",
    url_title: "URL ఫిషింగ్ చెకర్",
    analysis_results: "విశ్లేషణ ఫలితాలు",
    phishing_score: "ఫిషింగ్ స్కోర్",
    detected_sender: "గుర్తించిన పంపినవాడు",
    sender_not_found: "కనుగొనబడలేదు",
    indicators: "గుర్తించిన ఫిషింగ్ సూచికలు:",
    no_indicators: "ఏ ఫిషింగ్ సూచికలు కనుగొనబడలేదు. ఈ ఇమెయిల్ సురక్షితంగా ఉంది.",
    safe_sender: "పంపినవారు సరైన చిరునామా నుండి ఉన్నట్లు కనిపిస్తుంది, అనుమానాస్పద ధృవీకరణ అభ్యర్థనలు లేవు.",
    no_content_warning: "విశ్లేషించడానికి కొంత ఇమెయిల్ కంటెంట్\u{200c}ను పేస్ట్ చేయండి.",
    url_warning: "దయచేసి తనిఖీ చేయడానికి ఒక URL నమోదు చేయండి.",
    keyword_detected: "🚩 అనుమానాస్పద కీవర్డ్ గుర్తించబడింది: ఈ URLలో 'login' లేదా 'bank' వంటి సున్నితమైన పదం ఉంది.",
    tld_detected: "🚩 అనుమానాస్పద టాప్-లెవల్ డొమైన్ గుర్తించబడింది:",
    heuristics_warning: "⚠ ఈ URL మా ప్రాథమిక హ్యూరిస్టిక్స్ ద్వారా ఫ్లాగ్ చేయబడింది. జాగ్రత్తగా కొనసాగండి.",
    url_safe: "✅ ఈ URL సురక్షితంగా ఉంది!",
    url_suspicious: "🚨 ఈ URL అనుమానాస్పదంగా ఉంది – ఫిషింగ్ కావచ్చు!",
};

static BN: Strings = Strings {
    email_title: "এআই জিমেইল ফিশিং ডিটেক্টর",
    url_title: "ইউআরএল ফিশিং চেকার",
    analysis_results: "বিশ্লেষণের ফলাফল",
    phishing_score: "ফিশিং স্কোর",
    detected_sender: "সনাক্তকৃত প্রেরক",
    sender_not_found: "পাওয়া যায়নি",
    indicators: "সনাক্তকৃত ফিশিং সূচক:",
    no_indicators: "কোনও স্পষ্ট ফিশিং সূচক পাওয়া যায়নি। এই ইমেইলটি নিরাপদ বলে মনে হচ্ছে।",
    safe_sender: "প্রেরক একটি বৈধ ঠিকানা থেকে এসেছে বলে মনে হচ্ছে, কোনও সন্দেহজনক যাচাইকরণের অনুরোধ নেই।",
    no_content_warning: "দয়া করে বিশ্লেষণের জন্য কিছু ইমেইল বিষয়বস্তু পেস্ট করুন।",
    url_warning: "দয়া করে পরীক্ষা করার জন্য একটি ইউআরএল লিখুন।",
    keyword_detected: "🚩 সন্দেহজনক কীওয়ার্ড সনাক্ত করা হয়েছে: এই ইউআরএলে 'login' বা 'bank' এর মতো সংবেদনশীল শব্দ রয়েছে।",
    tld_detected: "🚩 সন্দেহজনক টপ-লেভেল ডোমেইন সনাক্ত করা হয়েছে:",
    heuristics_warning: "⚠ এই ইউআরএল আমাদের মৌলিক হিউরিস্টিক্স দ্বারা ফ্ল্যাগ করা হয়েছে। সতর্কতার সাথে এগিয়ে যান।",
    url_safe: "✅ ইউআরএলটি নিরাপদ বলে মনে হচ্ছে!",
    url_suspicious: "🚨 এই ইউআরএলটি খুব সন্দেহজনক – সম্ভবত ফিশিং!",
};

static UR: Strings = Strings {
    email_title: "اے آئی جی میل فشنگ ڈیٹیکٹر",
    url_title: "یو آر ایل فشنگ چیکر",
    analysis_results: "تجزیاتی نتائج",
    phishing_score: "فشنگ سکور",
    detected_sender: "پہچاننے والا بھیجنے والا",
    sender_not_found: "نہیں ملا",
    indicators: "پہچانے گئے فشنگ اشارے:",
    no_indicators: "کوئی واضح فشنگ اشارے نہیں ملے۔ یہ ای میل محفوظ لگتی ہے۔",
    safe_sender: "بھیجنے والا ایک جائز پتہ لگتا ہے، کوئی مشتبہ تصدیقی درخواست نہیں۔",
    no_content_warning: "تجزیہ کرنے کے لیے کچھ ای میل مواد پیسٹ کریں۔",
    url_warning: "براہ کرم چیک کرنے کے لیے ایک یو آر ایل درج کریں۔",
    keyword_detected: "🚩 مشتبہ کلیدی لفظ پایا گیا: اس یو آر ایل میں 'login' یا 'bank' جیسے حساس الفاظ ہیں۔",
    tld_detected: "🚩 مشتبہ ٹاپ-لیول ڈومین پایا گیا:",
    heuristics_warning: "⚠ یہ یو آر ایل ہماری بنیادی ہورسٹکس کے تحت فلیگ کیا گیا ہے۔ احتیاط سے آگے بڑھیں۔",
    url_safe: "✅ یہ یو آر ایل محفوظ لگتا ہے!",
    url_suspicious: "🚨 یہ یو آر ایل انتہائی مشتبہ ہے – ممکنہ فشنگ!",
};

pub fn strings(language: Language) -> &'static Strings {
    match language {
        Language::En => &EN,
        Language::Hi => &HI,
        Language::Te => &TE,
        Language::Bn => &BN,
        Language::Ur => &UR,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_language_has_its_own_table() {
        assert_eq!(strings(Language::En).phishing_score, "Phishing Score");
        assert_eq!(strings(Language::Hi).phishing_score, "फ़िशिंग स्कोर");
        assert_eq!(strings(Language::Ur).sender_not_found, "نہیں ملا");
        for language in Language::ALL {
            assert!(!strings(language).no_indicators.is_empty());
        }
    }
}
