/// Reference tips loaded into `knowledge_base` on first start:
/// (keyword, response, source).
pub const SEED: &[(&str, &str, &str)] = &[
    // anxiety & stress
    (
        "anxiety",
        "Try \"Box Breathing\": Inhale for 4 seconds, Hold for 4, Exhale for 4, Hold for 4. It hacks your vagus nerve to calm you down.",
        "Navy SEAL Technique",
    ),
    (
        "anxiety",
        "The \"3-3-3 Rule\": Name 3 things you see, 3 sounds you hear, and move 3 parts of your body. It pulls you out of your head.",
        "Trauma Center",
    ),
    (
        "stress",
        "Academic stress is real. Remember: Your grades describe your performance, not your worth as a human being.",
        "Campus Psychology",
    ),
    (
        "panic",
        "Hold an ice cube in your hand. The intense sensation forces your brain to focus on the cold rather than the panic spiral.",
        "Therapy Aid",
    ),
    // depression & isolation
    (
        "depression",
        "Depression lies to you. It says \"nothing matters.\" Try \"Behavioral Activation\": Do one small task (like washing a cup) even if you don't feel like it.",
        "CBT Principles",
    ),
    (
        "lonely",
        "Isolation feeds depression. Try the \"15-minute rule\": Go to a public place (library, cafe) for just 15 minutes. You don't have to talk to anyone, just be near people.",
        "Social Health",
    ),
    (
        "sad",
        "It is okay to have a \"rot day\" where you do nothing, but set a time limit. Tomorrow, we try again.",
        "Self-Compassion",
    ),
    // eating
    (
        "eating",
        "Your body is the instrument of your life, not just an ornament. If you are obsessing over food, please reach out to NEDA or a counselor.",
        "NEDA",
    ),
    (
        "body image",
        "Social media is a highlight reel, not reality. Unfollow accounts that make you feel bad about your body.",
        "Digital Wellness",
    ),
    (
        "starving",
        "Your brain needs glucose to study. Starving yourself actually lowers your grades by brain fog. Please nourish yourself.",
        "Nutritional Science",
    ),
    // addiction
    (
        "addiction",
        "Cravings usually last only 20 minutes. Can you \"surf the urge\"? Distract yourself for 20 minutes and the intensity will likely drop.",
        "Recovery Logic",
    ),
    (
        "drinking",
        "Using substances to cope with stress creates a feedback loop. The relief is temporary, but the anxiety comes back double. Consider a \"Sober October\" challenge.",
        "Health Services",
    ),
    // trauma
    (
        "ptsd",
        "If you are having a flashback: Stomp your feet on the ground. Say \"I am [Name], I am in [Room], and the year is [Year].\" Anchor yourself in the present.",
        "Grounding Tech",
    ),
    (
        "trauma",
        "Trauma is not just in your head; it lives in the body. Yoga or progressive muscle relaxation can help release that stored tension.",
        "The Body Keeps the Score",
    ),
    // psychosis
    (
        "voices",
        "If you are hearing things others don't, it is vital to check in with a doctor. It's a medical condition like asthma, and medication can help quiet the noise.",
        "Medical Guide",
    ),
    (
        "delusion",
        "If reality feels slippery right now, stick to a strict routine. Wake up, eat, and sleep at the same time. Routine is a safety anchor.",
        "Psychiatry",
    ),
    // academic & financial
    (
        "grades",
        "One bad grade is a detour, not a dead end. Have you visited the professor's office hours to discuss extra credit?",
        "Academic Advisor",
    ),
    (
        "money",
        "Financial worry is exhausting. Have you checked the Student Union for food pantries or emergency grants?",
        "Financial Aid Office",
    ),
    (
        "focus",
        "Poor focus often comes from \"Multitasking.\" The brain cannot multitask. Try the Pomodoro timer: 25 mins work, 5 mins phone.",
        "Study Hacks",
    ),
    // personality
    (
        "bpd",
        "Emotion regulation tip: \"Opposite Action.\" If you feel like isolating (fear), go to a public place. If you feel like yelling (anger), speak softly.",
        "DBT Skills",
    ),
    (
        "mood swings",
        "Track your moods. Is there a trigger? Hunger? Sleep? Often \"HALT\" (Hungry, Angry, Lonely, Tired) causes the swing.",
        "Self-Awareness",
    ),
    // crisis
    (
        "suicide",
        "I hear that you are in deep pain. Please, stay with us. Call 988 (USA) or your local emergency number immediately. You are valuable.",
        "CRISIS ALERT",
    ),
    (
        "kill",
        "Please pause. Your pain is valid, but it is temporary. Suicide is permanent. Text \"HOME\" to 741741 to chat with a human right now.",
        "CRISIS ALERT",
    ),
];
