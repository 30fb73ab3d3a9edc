//! Structured site content turned into searchable corpus items.
//!
//! Records mirror the site sections (exams, pathologies, guides, blog
//! articles); each becomes one [`ContentItem`] whose searchable blob
//! concatenates every text field worth matching on, title first.

use super::{ContentItem, ItemKind};

struct ExamRecord {
    slug: &'static str,
    title: &'static str,
    description: &'static str,
    indications: &'static [&'static str],
    preparation: &'static str,
    procedure: &'static str,
    aftercare: &'static str,
    risks: &'static [&'static str],
}

struct PathologyRecord {
    slug: &'static str,
    title: &'static str,
    summary: &'static str,
    symptoms: &'static [&'static str],
    tags: &'static [&'static str],
    treatments: &'static [&'static str],
    advice: &'static [&'static str],
    prevention: &'static [&'static str],
    exams: &'static [&'static str],
}

struct GuideRecord {
    slug: &'static str,
    title: &'static str,
    summary: &'static str,
    steps: &'static [&'static str],
}

struct ArticleRecord {
    slug: &'static str,
    title: &'static str,
    excerpt: &'static str,
    content: &'static str,
}

/// Builds the full content corpus. Called once per index build.
pub fn items() -> Vec<ContentItem> {
    let mut items = Vec::new();

    for exam in EXAMS {
        let indications = exam.indications.join(" ");
        let risks = exam.risks.join(" ");
        let blob = [
            exam.title,
            exam.description,
            indications.as_str(),
            exam.preparation,
            exam.procedure,
            exam.aftercare,
            risks.as_str(),
        ]
        .join(" ");
        items.push(ContentItem::new(
            ItemKind::Exam,
            exam.title,
            &format!("/examens/{}", exam.slug),
            &blob,
        ));
    }

    for path in PATHOLOGIES {
        let lists = [
            path.symptoms.join(" "),
            path.tags.join(" "),
            path.treatments.join(" "),
            path.advice.join(" "),
            path.prevention.join(" "),
            path.exams.join(" "),
        ]
        .join(" ");
        let blob = [path.title, path.summary, lists.as_str()].join(" ");
        items.push(ContentItem::new(
            ItemKind::Pathology,
            path.title,
            &format!("/pathologies/{}", path.slug),
            &blob,
        ));
    }

    for guide in GUIDES {
        let steps = guide.steps.join(" ");
        let blob = [guide.title, guide.summary, steps.as_str()].join(" ");
        items.push(ContentItem::new(
            ItemKind::Guide,
            guide.title,
            &format!("/guides/#{}", guide.slug),
            &blob,
        ));
    }

    for post in ARTICLES {
        let blob = [post.title, post.excerpt, post.content].join(" ");
        items.push(ContentItem::new(
            ItemKind::Article,
            post.title,
            &format!("/blog/{}", post.slug),
            &blob,
        ));
    }

    items
}

const EXAMS: &[ExamRecord] = &[
    ExamRecord {
        slug: "gastroscopie",
        title: "Gastroscopie",
        description: "Explorations oeso-gastriques et duodénales.",
        indications: &[
            "Brûlures, reflux, douleurs hautes",
            "Anémie, vomissements, suspicion d'ulcère",
        ],
        preparation: "Jeûne de 6h pour les solides et 2h pour les liquides clairs, selon consignes de l'anesthésie.",
        procedure: "Examen endoscopique sous anesthésie ou sédation courte, durée environ 10 minutes.",
        aftercare: "Repos court, reprise alimentaire légère après avis médical; ne pas conduire en cas de sédation.",
        risks: &[
            "Sédation : somnolence transitoire (ne pas conduire le jour même)",
            "Très rares complications : saignement, perforation (expliquées avant l'examen)",
        ],
    },
    ExamRecord {
        slug: "coloscopie",
        title: "Coloscopie",
        description: "Prévention et diagnostic des maladies du côlon.",
        indications: &[
            "Dépistage colorectal",
            "Sang dans les selles, diarrhée chronique, douleurs abdominales",
        ],
        preparation: "Régime pauvre en résidus et laxatif la veille selon l'ordonnance.",
        procedure: "Examen endoscopique sous anesthésie courte; polypes retirés si besoin.",
        aftercare: "Surveillance courte, ballonnements possibles; signes d'alerte expliqués avant la sortie.",
        risks: &[
            "Ballonnements transitoires après l'examen",
            "Risque faible de saignement ou perforation (notamment si polype retiré)",
        ],
    },
    ExamRecord {
        slug: "echographie",
        title: "Échographie",
        description: "Échographie abdominale et pelvienne.",
        indications: &[
            "Bilan hépatique",
            "Douleurs abdominales",
            "Surveillance biliaire ou pancréatique",
        ],
        preparation: "À jeun selon l'organe exploré; consignes précisées lors du rendez-vous.",
        procedure: "Examen indolore avec sonde sur l'abdomen, gel posé sur la peau.",
        aftercare: "Reprise immédiate des activités; compte-rendu oral puis écrit.",
        risks: &["Aucun risque connu, examen non irradiant."],
    },
    ExamRecord {
        slug: "hepatologie",
        title: "Hépatologie",
        description: "Suivi des maladies du foie et bilan hépatique.",
        indications: &[
            "Bilan enzymes hépatiques",
            "Foie gras non alcoolique",
            "Surveillance hépatite",
        ],
        preparation: "Bilan sanguin préalable selon prescription.",
        procedure: "Consultation spécialisée, éventuel complément échographique ou fibroscan.",
        aftercare: "Plan de suivi personnalisé (biologie, imagerie, hygiène de vie).",
        risks: &["Aucun risque spécifique en consultation; risques propres aux examens complémentaires expliqués le cas échéant."],
    },
    ExamRecord {
        slug: "echo-endoscopie",
        title: "Echo-endoscopie",
        description: "Explorations écho-endoscopiques haute et basse.",
        indications: &["Exploration biliaire/pancréatique", "Kystes, masses digestives"],
        preparation: "Jeûne et préparation digestive selon indication.",
        procedure: "Endoscope équipé d'une sonde d'échographie pour visualiser les organes de voisinage.",
        aftercare: "Surveillance post-anesthésie; reprise progressive de l'alimentation.",
        risks: &[
            "Risques liés à l'anesthésie",
            "Risque faible de saignement ou perforation selon le geste",
        ],
    },
    ExamRecord {
        slug: "catheterisme-biliaire",
        title: "Cathétérisme biliaire",
        description: "Interventions endoscopiques de la voie biliaire.",
        indications: &["Calculs biliaires", "Sténoses biliaires"],
        preparation: "Jeûne strict; bilan sanguin de coagulation selon protocole.",
        procedure: "Geste endoscopique (type CPRE) pour extraire calculs ou poser une prothèse.",
        aftercare: "Surveillance hospitalière courte; consignes de reprise alimentaire.",
        risks: &[
            "Pancréatite post-CPRE (rare mais surveillée)",
            "Saignement ou infection (faible fréquence)",
        ],
    },
    ExamRecord {
        slug: "maladies-anus",
        title: "Maladies de l'anus",
        description: "Prise en charge proctologique.",
        indications: &["Douleurs, saignements, fissure, hémorroïdes"],
        preparation: "Souvent sans préparation; lavement possible selon l'examen.",
        procedure: "Consultation et examen proctologique; gestes simples si indiqué.",
        aftercare: "Hygiène locale, soins prescrits, surveillance des symptômes.",
        risks: &[
            "Inconfort transitoire local",
            "Risques minimes pour les gestes simples (saignement local)",
        ],
    },
    ExamRecord {
        slug: "nutrition",
        title: "Nutrition",
        description: "Conseils nutritionnels adaptés.",
        indications: &[
            "Surpoids, diabète, syndrome métabolique",
            "Troubles digestifs fonctionnels",
        ],
        preparation: "Carnet alimentaire ou bilan biologique utile selon le motif.",
        procedure: "Consultation dédiée avec plan alimentaire personnalisé.",
        aftercare: "Suivi régulier pour adapter les objectifs et surveiller les bilans.",
        risks: &["Aucun risque spécifique"],
    },
    ExamRecord {
        slug: "explorations-fonctionnelles",
        title: "Explorations fonctionnelles",
        description: "Bilans digestifs et fonctionnels.",
        indications: &[
            "Troubles du transit",
            "Suspicion de malabsorption",
            "pH-métrie, manométrie",
        ],
        preparation: "Consignes spécifiques selon l'examen (jeûne, arrêt de traitements).",
        procedure: "Tests fonctionnels ciblés (pH-métrie, manométrie, tests respiratoires).",
        aftercare: "Reprise normale sauf consigne contraire; résultats expliqués en consultation.",
        risks: &["Gêne transitoire selon le test (sonde nasale, etc.)"],
    },
];

const PATHOLOGIES: &[PathologyRecord] = &[
    PathologyRecord {
        slug: "gastro-enterite",
        title: "Gastro-entérite",
        summary: "Nausées, vomissements, diarrhée : comment se réhydrater et surveiller ?",
        symptoms: &["Nausées, vomissements", "Diarrhée aiguë", "Crampes abdominales"],
        tags: &["diarrhee", "vomissements", "fièvre"],
        treatments: &[
            "Réhydratation orale fractionnée",
            "Régime pauvre en fibres et gras",
            "Antalgiques adaptés",
        ],
        advice: &[
            "Boire en petites quantités régulières",
            "Surveiller la fièvre",
            "Consulter si symptômes > 48h",
        ],
        prevention: &["Hygiène des mains", "Cuisson suffisante des aliments"],
        exams: &["Bilan sanguin si fièvre ou terrain fragile", "Coproculture selon contexte"],
    },
    PathologyRecord {
        slug: "brulure-estomac",
        title: "Brûlures d'estomac / reflux",
        summary: "Sensation de brûlure rétro-sternale, remontées acides, gêne après les repas.",
        symptoms: &[
            "Brûlures rétro-sternales",
            "Remontées acides",
            "Toux nocturne",
            "Gêne en position allongée",
        ],
        tags: &["brulure", "reflux", "nausées"],
        treatments: &[
            "Mesures hygiéno-diététiques",
            "Inhibiteurs de pompe à protons si besoin",
        ],
        advice: &[
            "Surélever la tête du lit",
            "Éviter repas copieux et tardifs",
            "Limiter alcool, café, tabac",
        ],
        prevention: &["Poids stable", "Repas fractionnés"],
        exams: &["Gastroscopie si signes d'alarme", "pH-métrie selon indications"],
    },
    PathologyRecord {
        slug: "gastrite",
        title: "Gastrite",
        summary: "Inflammation de la muqueuse de l'estomac : douleurs, brûlures, inconfort post-prandial.",
        symptoms: &["Douleurs épigastriques", "Brûlures", "Nausées"],
        tags: &["douleur estomac", "nausées"],
        treatments: &["Traitement de l'acidité", "Éradication H. pylori si présent"],
        advice: &["Éviter AINS/aspirine sans avis", "Limiter alcool et tabac"],
        prevention: &["Prudence AINS", "Repas légers"],
        exams: &["Gastroscopie si symptômes persistants", "Recherche H. pylori"],
    },
    PathologyRecord {
        slug: "diarrhee-chronique",
        title: "Diarrhée chronique",
        summary: "Plus de 3 semaines de diarrhée : bilan adapté, signes d'alerte.",
        symptoms: &["Selles liquides > 3 semaines", "Ballonnements", "Crampes"],
        tags: &["diarrhee", "fièvre", "sang selles"],
        treatments: &["Réhydratation", "Adaptation alimentaire", "Traitement étiologique"],
        advice: &[
            "Surveiller les signes de déshydratation",
            "Noter le lien avec aliments/medicaments",
        ],
        prevention: &["Hygiène alimentaire", "Suivi médical"],
        exams: &["Bilan sanguin", "Coproculture", "Coloscopie selon contexte"],
    },
    PathologyRecord {
        slug: "foie-gras",
        title: "Foie gras non alcoolique",
        summary: "Prévention de la progression vers la fibrose : mode de vie et suivi.",
        symptoms: &["Souvent asymptomatique", "Fatigue", "Inconfort abdominal"],
        tags: &["foie", "bilan hepatique"],
        treatments: &[
            "Perte de poids progressive",
            "Activité physique",
            "Suivi médical",
        ],
        advice: &["Alimentation équilibrée", "Limiter sucres et alcool"],
        prevention: &["Activité physique régulière", "Suivi biologique"],
        exams: &["Bilan hépatique", "Échographie", "Fibroscan selon indications"],
    },
    PathologyRecord {
        slug: "lithiase-biliaire",
        title: "Calculs biliaires",
        summary: "Présence de calculs dans la vésicule : colique hépatique et complications.",
        symptoms: &[
            "Douleur brutale sous les côtes à droite",
            "Irradiation vers l'épaule ou le dos",
            "Nausées ou vomissements",
        ],
        tags: &["douleur abdominale", "vésicule", "colique"],
        treatments: &[
            "Antalgiques et antispasmodiques",
            "Chirurgie (cholécystectomie) si symptomatique",
        ],
        advice: &["Éviter les repas très gras", "Consulter si récidive"],
        prevention: &["Alimentation équilibrée", "Éviter le jeûne prolongé"],
        exams: &["Échographie abdominale", "Bilan hépatique"],
    },
    PathologyRecord {
        slug: "maladie-crohn",
        title: "Maladie de Crohn",
        summary: "Maladie inflammatoire chronique pouvant toucher tout le tube digestif.",
        symptoms: &[
            "Douleurs abdominales",
            "Diarrhée chronique",
            "Perte de poids",
            "Fatigue",
        ],
        tags: &["diarrhee", "douleur abdominale", "MICI"],
        treatments: &["Anti-inflammatoires", "Immunosuppresseurs", "Biothérapies"],
        advice: &["Arrêt strict du tabac", "Suivi régulier même en rémission"],
        prevention: &["Arrêt du tabac"],
        exams: &["Coloscopie avec biopsies", "Entéro-IRM", "Bilan sanguin (CRP)"],
    },
    PathologyRecord {
        slug: "rch",
        title: "Rectocolite hémorragique (RCH)",
        summary: "Inflammation chronique du rectum et du côlon.",
        symptoms: &["Diarrhée sanglante", "Faux besoins", "Douleurs rectales"],
        tags: &["sang selles", "diarrhee", "MICI"],
        treatments: &["5-ASA (suppositoires/comprimés)", "Corticoïdes", "Biothérapies"],
        advice: &["Suivre le traitement d'entretien", "Surveiller les selles"],
        prevention: &["Suivi médical régulier"],
        exams: &["Rectosigmoïdoscopie ou coloscopie", "Calprotectine fécale"],
    },
    PathologyRecord {
        slug: "syndrome-intestin-irritable",
        title: "Syndrome de l'intestin irritable",
        summary: "Trouble fonctionnel fréquent associant douleurs et troubles du transit.",
        symptoms: &[
            "Ballonnements",
            "Douleurs soulagées par les selles",
            "Alternance diarrhée/constipation",
        ],
        tags: &["douleur abdominale", "ballonnements", "constipation"],
        treatments: &[
            "Antispasmodiques",
            "Régime pauvre en FODMAPs",
            "Probiotiques",
        ],
        advice: &["Identifier les aliments déclencheurs", "Gestion du stress"],
        prevention: &["Alimentation équilibrée", "Activité physique"],
        exams: &[
            "Bilan sanguin pour éliminer autre cause",
            "Coloscopie si signes d'alarme",
        ],
    },
    PathologyRecord {
        slug: "ulcere-gastrique",
        title: "Ulcère gastrique",
        summary: "Plaie profonde dans la paroi de l'estomac.",
        symptoms: &[
            "Douleur type crampe à l'estomac",
            "Calmée ou aggravée par les repas",
        ],
        tags: &["douleur estomac", "ulcere"],
        treatments: &[
            "IPP (Inhibiteurs de la pompe à protons)",
            "Éradication H. pylori",
        ],
        advice: &[
            "Arrêt tabac et alcool",
            "Éviter l'automédication par anti-inflammatoires",
        ],
        prevention: &["Prudence avec les AINS"],
        exams: &["Gastroscopie (indispensable)", "Biopsies"],
    },
    PathologyRecord {
        slug: "cirrhose",
        title: "Cirrhose du foie",
        summary: "Stade avancé de fibrose hépatique, irréversible mais stabilisable.",
        symptoms: &[
            "Souvent asymptomatique au début",
            "Puis fatigue, jaunisse, ascite",
        ],
        tags: &["foie", "jaunisse", "fatigue"],
        treatments: &[
            "Traitement de la cause (alcool, virus)",
            "Surveillance complications",
        ],
        advice: &["Arrêt total alcool", "Vaccination hépatites"],
        prevention: &["Dépistage hépatites", "Lutte contre l'alcoolisme"],
        exams: &["Bilan hépatique", "Échographie", "Fibroscan"],
    },
    PathologyRecord {
        slug: "maladie-coeliaque",
        title: "Maladie cœliaque",
        summary: "Intolérance immunitaire au gluten (blé, orge, seigle).",
        symptoms: &["Diarrhée", "Ballonnements", "Anémie", "Amaigrissement"],
        tags: &["diarrhee", "anemie", "gluten"],
        treatments: &["Régime sans gluten strict et à vie"],
        advice: &[
            "Apprendre à lire les étiquettes",
            "Attention aux contaminations croisées",
        ],
        prevention: &["Aucune (prédisposition génétique)"],
        exams: &[
            "Anticorps anti-transglutaminase",
            "Gastroscopie avec biopsies duodénales",
        ],
    },
    PathologyRecord {
        slug: "diverticulite",
        title: "Diverticulite",
        summary: "Infection d'un diverticule : la 'sigmoïdite'.",
        symptoms: &[
            "Douleur en bas à gauche du ventre",
            "Fièvre",
            "Troubles du transit",
        ],
        tags: &["douleur abdominale", "fievre", "colon"],
        treatments: &[
            "Antibiotiques",
            "Régime sans résidus",
            "Parfois hospitalisation",
        ],
        advice: &["Reprise progressive des fibres après guérison"],
        prevention: &["Traiter la constipation"],
        exams: &["Scanner abdominal (examen de référence)", "Bilan sanguin"],
    },
    PathologyRecord {
        slug: "polypes-colon",
        title: "Polypes du côlon",
        summary: "Excroissances sur la paroi du côlon, précurseurs possibles du cancer.",
        symptoms: &["Généralement aucun", "Parfois sang dans les selles"],
        tags: &["colon", "prevention", "sang selles"],
        treatments: &["Ablation endoscopique (polypectomie)"],
        advice: &["Suivre le rythme des coloscopies de contrôle"],
        prevention: &["Dépistage organisé (test immunologique)"],
        exams: &["Coloscopie (diagnostic et traitement)"],
    },
    PathologyRecord {
        slug: "cancer-colon",
        title: "Cancer colorectal",
        summary: "Tumeur maligne du côlon ou du rectum.",
        symptoms: &[
            "Sang dans les selles",
            "Modification du transit récente",
            "Anémie",
        ],
        tags: &["sang selles", "cancer", "colon"],
        treatments: &["Chirurgie", "Chimiothérapie", "Radiothérapie (rectum)"],
        advice: &["Dépistage dès 50 ans ou avant si antécédents"],
        prevention: &["Test immunologique tous les 2 ans (50-74 ans)"],
        exams: &["Coloscopie avec biopsies", "Scanner TAP"],
    },
];

const GUIDES: &[GuideRecord] = &[
    GuideRecord {
        slug: "preparation-coloscopie",
        title: "Comment se préparer à une coloscopie",
        summary: "Étapes la veille et le jour J, diète et laxatif.",
        steps: &[
            "Régime pauvre en résidus la veille (précisions sur l'ordonnance).",
            "Boire le laxatif aux horaires indiqués, en fractionnant si besoin.",
            "Hydratation par liquides clairs jusqu'à l'horaire autorisé.",
            "Arriver accompagné si anesthésie; ne pas conduire après l'examen.",
        ],
    },
    GuideRecord {
        slug: "deroulement-fibroscopie",
        title: "Comment se déroule une fibroscopie",
        summary: "Durée de l'examen, anesthésie et reprise alimentaire.",
        steps: &[
            "Jeûne de 6h pour solides et 2h pour liquides clairs, sauf consigne différente.",
            "Sédation courte ou anesthésie selon indication; durée d'examen environ 10 minutes.",
            "Surveillance en salle de réveil; reprise alimentaire légère après accord médical.",
            "Ne pas conduire le jour même en cas de sédation/anesthésie.",
        ],
    },
    GuideRecord {
        slug: "anesthesie-endoscopie",
        title: "Anesthésie pour endoscopie : questions fréquentes",
        summary: "Sécurité, jeûne, reprise des traitements habituels.",
        steps: &[
            "Respecter le jeûne indiqué; signaler tout traitement (anticoagulant, antiagrégant).",
            "Prendre les traitements autorisés avec une petite gorgée d'eau si prescrit.",
            "Prévoir un accompagnant; ne pas conduire ni signer de documents importants le jour même.",
            "En cas de fièvre ou symptômes la veille, prévenir le secrétariat/anesthésiste.",
        ],
    },
    GuideRecord {
        slug: "apres-examen",
        title: "Recommandations après l'examen",
        summary: "Surveillance à domicile, reprise alimentaire, signes d'alerte.",
        steps: &[
            "Repos le jour de l'examen; reprise alimentaire légère selon les consignes.",
            "Ballonnements transitoires possibles après une coloscopie.",
            "Consulter en urgence si douleurs intenses, fièvre ou saignement.",
            "Le compte-rendu est remis à la sortie; résultats de biopsies sous 10 à 15 jours.",
        ],
    },
];

const ARTICLES: &[ArticleRecord] = &[
    ArticleRecord {
        slug: "choix-preparation-coloscopie",
        title: "Pour une coloscopie, quel produit choisir ?",
        excerpt: "Comparatif des différentes préparations pour coloscopie : PEG, CitraFleet, Picoprep, Izinova... Lequel choisir ?",
        content: "La coloscopie est un examen d'endoscopie digestive qui permet d'étudier la paroi interne du colon. La préparation est indispensable pour un examen de qualité : le côlon doit être parfaitement propre. Les préparations à base de PEG (Colopeg, Fortrans, Klean Prep, Moviprep) demandent un volume important; les préparations à base de laxatifs (Picoprep, CitraFleet, Colokit, Izinova) sont mieux tolérées mais exigent de bien boire des liquides clairs.",
    },
    ArticleRecord {
        slug: "fibres-et-microbiote",
        title: "Fibres et microbiote : pourquoi en manger ?",
        excerpt: "Les fibres nourrissent votre microbiote et régulent le transit. Comment les intégrer progressivement ?",
        content: "Les fibres solubles et insolubles soutiennent la flore, limitent le pic glycémique et régulent le transit. Augmentez-les progressivement, buvez suffisamment, et consultez si douleurs ou ballonnements persistants.",
    },
    ArticleRecord {
        slug: "diarrhee-chronique",
        title: "Diarrhée chronique : quand consulter ?",
        excerpt: "Plus de 3 semaines de diarrhée : signes d'alerte, bilans et examens utiles.",
        content: "Une diarrhée qui dure nécessite un avis médical. Signes d'alerte : fièvre, sang dans les selles, amaigrissement, douleurs abdominales. Bilan sanguin, coproculture, calprotectine ou coloscopie peuvent être proposés selon le contexte.",
    },
    ArticleRecord {
        slug: "reflux-enceinte",
        title: "Reflux chez la femme enceinte : gestes simples",
        excerpt: "Adapter les repas, surélever la tête du lit, traitements compatibles : les bons réflexes.",
        content: "Fractionnez les repas, évitez les aliments acides, café, épices fortes. Surélevez la tête du lit et attendez 2-3h avant de vous allonger. Un traitement peut être proposé si les mesures hygiéno-diététiques ne suffisent pas.",
    },
    ArticleRecord {
        slug: "foie-gras",
        title: "Foie gras non alcoolique : prévenir et suivre",
        excerpt: "Alimentation, activité physique et suivi biologique pour limiter la progression.",
        content: "Le foie gras non alcoolique repose sur une alimentation équilibrée, une perte de poids progressive, l'activité physique et le suivi des enzymes hépatiques. Consultez pour adapter les examens (fibroscan, échographie).",
    },
    ArticleRecord {
        slug: "manger-lentement",
        title: "Pourquoi faut-il manger lentement ?",
        excerpt: "La digestion commence dans la bouche. Mâcher réduit le travail de l'estomac et les ballonnements.",
        content: "Prenez le temps de mastiquer. Cela permet de mieux imprégner les aliments de salive (enzymes), d'envoyer des signaux de satiété au cerveau et d'éviter d'avaler de l'air (aérophagie).",
    },
    ArticleRecord {
        slug: "probiotiques-naturels",
        title: "Les meilleures sources de probiotiques",
        excerpt: "Yaourts, choucroute, kéfir : ces aliments fermentés enrichissent votre flore intestinale.",
        content: "Les probiotiques sont des bactéries vivantes bénéfiques. Intégrez régulièrement des aliments fermentés comme le yaourt, le kéfir, la choucroute ou le miso pour diversifier votre microbiote.",
    },
    ArticleRecord {
        slug: "intolerance-lactose",
        title: "Intolérance au lactose : comment la reconnaître ?",
        excerpt: "Ballonnements et diarrhée après le lait : les signes qui orientent et les tests utiles.",
        content: "L'intolérance au lactose provoque ballonnements, gaz et diarrhée après les produits laitiers. Un test respiratoire confirme le diagnostic. Les laitages fermentés et les laits sans lactose restent souvent bien tolérés.",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_one_item_per_record() {
        let items = items();
        assert_eq!(
            items.len(),
            EXAMS.len() + PATHOLOGIES.len() + GUIDES.len() + ARTICLES.len()
        );
    }

    #[test]
    fn urls_follow_site_sections() {
        let items = items();
        let exam = items.iter().find(|i| i.kind == ItemKind::Exam).unwrap();
        assert!(exam.url.starts_with("/examens/"));
        let guide = items.iter().find(|i| i.kind == ItemKind::Guide).unwrap();
        assert!(guide.url.starts_with("/guides/#"));
    }

    #[test]
    fn blobs_cover_nested_fields() {
        let items = items();
        let crohn = items.iter().find(|i| i.title == "Maladie de Crohn").unwrap();
        // symptom and treatment lists are searchable, not just the title
        assert!(crohn.contains("diarrhee"));
        assert!(crohn.contains("biotherapies"));
    }
}
