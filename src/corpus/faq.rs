//! Curated question/answer corpora, one per supported language.

use crate::engine::lang::Lang;

pub fn entries(lang: Lang) -> &'static [(&'static str, &'static str)] {
    match lang {
        Lang::Fr => FAQS_FR,
        Lang::En => FAQS_EN,
        Lang::Es => FAQS_ES,
    }
}

const FAQS_FR: &[(&str, &str)] = &[
    (
        "Comment prendre rendez-vous ?",
        "Vous pouvez prendre rendez-vous par téléphone au 40 81 48 48, sur Maiia, ou via le formulaire de contact sur le site.",
    ),
    (
        "Dois-je être à jeun avant une endoscopie ?",
        "Oui, en général 6h sans manger et 2h sans boire de liquide clair, sauf consigne différente.",
    ),
    (
        "Puis-je conduire après une anesthésie ?",
        "Non, prévoyez un accompagnant. Ne conduisez pas ni ne signez de documents importants le jour même.",
    ),
    (
        "C'est quoi une coloscopie ?",
        "C'est un examen qui permet d'explorer l'intérieur du côlon à l'aide d'une caméra souple, pour dépister des polypes ou des maladies.",
    ),
    (
        "Quels traitements dois-je arrêter avant une coloscopie ?",
        "Aspirine, anticoagulants ou antiagrégants peuvent nécessiter un ajustement : demandez un avis personnalisé.",
    ),
    (
        "Combien de temps dure une coloscopie ?",
        "Environ 20 à 30 minutes, plus le temps de préparation et de réveil.",
    ),
    (
        "Quand consulter en urgence ?",
        "Fièvre élevée, sang dans les selles, douleurs abdominales intenses, vomissements répétés : appelez ou rendez-vous aux urgences.",
    ),
    (
        "Faut-il une ordonnance pour consulter ?",
        "Il est préférable d'avoir un courrier de votre médecin traitant pour respecter le parcours de soins et être mieux remboursé.",
    ),
    (
        "Quels sont les horaires d'ouverture et de consultation du cabinet ?",
        "Le cabinet est ouvert du lundi au vendredi de 7h00 à 17h00, et le samedi de 8h30 à 12h00.",
    ),
    (
        "Quelle est l'adresse du cabinet ?",
        "Le cabinet est situé à Papeete, immeuble Air France. Des parkings sont disponibles à proximité (Tarahoi).",
    ),
    (
        "Comment contacter le cabinet ?",
        "Vous pouvez nous joindre par téléphone au 40 81 48 48 ou via le formulaire de contact du site.",
    ),
    (
        "Comment se passe le paiement ?",
        "Le règlement se fait sur place par chèque, espèces ou carte bancaire. Le tiers payant est possible selon votre couverture.",
    ),
    (
        "Où se garer pour venir au cabinet ?",
        "Des parkings publics sont disponibles à proximité de l'immeuble Air France (parking Tarahoi ou front de mer).",
    ),
    (
        "Puis-je avoir un arrêt de travail ?",
        "Un arrêt de travail peut être délivré le jour de l'examen (coloscopie/fibroscopie) si nécessaire.",
    ),
    (
        "Combien de temps avant d'avoir les résultats ?",
        "Le compte-rendu est remis immédiatement après l'examen. Les résultats de biopsies prennent environ 10 à 15 jours.",
    ),
    (
        "Que faire si j'ai oublié ma préparation ?",
        "Contactez le secrétariat au plus vite. Une mauvaise préparation peut obliger à annuler et reporter l'examen.",
    ),
    (
        "Puis-je venir accompagné ?",
        "Oui, c'est même obligatoire pour repartir après une anesthésie générale ou une sédation.",
    ),
    (
        "En quoi consiste une pH-métrie ?",
        "C'est un examen qui mesure l'acidité dans l'œsophage pendant 24h à l'aide d'une fine sonde nasale, pour diagnostiquer un reflux.",
    ),
    (
        "Qu'est-ce qu'une vidéocapsule ?",
        "C'est une gélule contenant une caméra que l'on avale pour explorer l'intestin grêle, zone inaccessible aux endoscopes classiques.",
    ),
    (
        "Peut-on faire une gastroscopie et une coloscopie en même temps ?",
        "Oui, c'est fréquent. Cela permet de réaliser les deux examens sous la même anesthésie.",
    ),
    (
        "Qu'est-ce que l'Helicobacter pylori ?",
        "C'est une bactérie présente dans l'estomac qui peut causer gastrites et ulcères. Elle se traite par antibiotiques.",
    ),
    (
        "Le stress peut-il causer des maux de ventre ?",
        "Oui, le stress influence le système digestif et peut aggraver le syndrome de l'intestin irritable ou les brûlures d'estomac.",
    ),
    (
        "Quels sont les symptômes d'un polype au côlon ?",
        "La plupart des polypes ne donnent aucun symptôme, d'où l'importance du dépistage par coloscopie avant qu'ils ne dégénèrent.",
    ),
    (
        "Y a-t-il des risques à passer une coloscopie ?",
        "Les risques (perforation, hémorragie) sont très rares. Le bénéfice du dépistage du cancer colorectal est largement supérieur.",
    ),
    (
        "C'est quoi des hémorroïdes ?",
        "Ce sont des veines dilatées au niveau de l'anus. Elles peuvent saigner ou être douloureuses. Le traitement est souvent médical (crèmes, veinotoniques) ou instrumental.",
    ),
    (
        "C'est quoi le syndrome de l'intestin irritable ?",
        "C'est un trouble fonctionnel fréquent associant douleurs abdominales et troubles du transit (diarrhée/constipation), sans gravité mais gênant.",
    ),
    (
        "Faut-il manger sans gluten ?",
        "Uniquement si vous avez une maladie coeliaque prouvée ou une sensibilité. Un régime sans gluten strict est contraignant et ne doit pas être fait sans avis médical.",
    ),
    (
        "Comment savoir si je suis intolérant au lactose ?",
        "Les symptômes sont ballonnements et diarrhée après avoir bu du lait. Un test respiratoire peut confirmer le diagnostic.",
    ),
    (
        "Sang rouge ou noir dans les selles ?",
        "Du sang rouge vient souvent de l'anus (hémorroïdes). Du sang noir (méléna) signale un saignement plus haut (estomac) et est une urgence.",
    ),
    (
        "Quels aliments éviter pour le reflux ?",
        "Évitez le café, l'alcool, les épices, les graisses, le chocolat et les boissons gazeuses. Ne vous couchez pas juste après le repas.",
    ),
    (
        "A quoi sert le Fibroscan ?",
        "C'est un appareil qui mesure l'élasticité du foie pour évaluer la fibrose (cicatrices) sans faire de biopsie. C'est indolore et rapide.",
    ),
    (
        "Comment attrape-t-on l'hépatite B ou C ?",
        "Principalement par le sang (matériel non stérile) ou les rapports sexuels non protégés (surtout hépatite B). Il existe un vaccin efficace contre l'hépatite B.",
    ),
    (
        "C'est quoi la maladie de Crohn ?",
        "C'est une maladie inflammatoire chronique de l'intestin (MICI) qui peut toucher tout le tube digestif. Elle se manifeste par des douleurs, diarrhées et fatigue.",
    ),
    (
        "C'est quoi la rectocolite hémorragique (RCH) ?",
        "C'est une maladie inflammatoire chronique qui ne touche que le rectum et le côlon. Elle provoque souvent des diarrhées sanglantes.",
    ),
    (
        "Qu'est-ce qu'une cirrhose ?",
        "C'est une maladie du foie où le tissu sain est remplacé par du tissu cicatriciel (fibrose), empêchant le foie de fonctionner. Les causes principales sont l'alcool et les virus.",
    ),
    (
        "C'est quoi une manométrie anorectale ?",
        "C'est un examen qui mesure les pressions au niveau de l'anus et du rectum pour explorer la constipation ou l'incontinence. C'est indolore.",
    ),
    (
        "Qu'est-ce qu'un ulcère à l'estomac ?",
        "C'est une plaie dans la paroi de l'estomac ou du duodénum, souvent causée par la bactérie Helicobacter pylori ou la prise d'anti-inflammatoires.",
    ),
    (
        "Le cancer du côlon est-il héréditaire ?",
        "Il existe des formes héréditaires (syndrome de Lynch, polypose), mais la plupart sont sporadiques. Le dépistage est crucial dès 50 ans ou avant en cas d'antécédents.",
    ),
];

const FAQS_EN: &[(&str, &str)] = &[
    (
        "How to make an appointment?",
        "You can make an appointment by phone at 40 81 48 48, on Maiia, or via the contact form on the website.",
    ),
    (
        "Do I need to be fasting before an endoscopy?",
        "Yes, usually 6 hours without eating and 2 hours without drinking clear liquids, unless otherwise instructed.",
    ),
    (
        "Can I drive after anesthesia?",
        "No, bring a companion. Do not drive or sign important documents on the same day.",
    ),
    (
        "What is a colonoscopy?",
        "It is an exam to explore the inside of the colon using a flexible camera, to screen for polyps or diseases.",
    ),
    (
        "What treatments should I stop before a colonoscopy?",
        "Aspirin, anticoagulants, or antiplatelet agents may need adjustment: ask for personalized advice.",
    ),
    (
        "How long does a colonoscopy take?",
        "About 20 to 30 minutes, plus preparation and recovery time.",
    ),
    (
        "When to consult in an emergency?",
        "High fever, blood in stool, intense abdominal pain, repeated vomiting: call or go to the emergency room.",
    ),
    (
        "What are the consultation hours?",
        "The office is open Monday to Friday from 7:00 AM to 5:00 PM, and Saturday from 8:30 AM to 12:00 PM.",
    ),
    (
        "How does payment work?",
        "Payment is made on-site by check, cash, or credit card. Third-party payment is possible depending on your coverage.",
    ),
    (
        "Where to park to come to the office?",
        "Public parking lots are available near the Air France building (Tarahoi or waterfront parking).",
    ),
    (
        "How long before getting the results?",
        "The report is given immediately after the exam. Biopsy results take about 10 to 15 days.",
    ),
    (
        "Are there risks to having a colonoscopy?",
        "Risks (perforation, bleeding) are very rare. The benefit of colorectal cancer screening far outweighs them.",
    ),
    (
        "What are hemorrhoids?",
        "They are dilated veins in the anus. They can bleed or be painful. Treatment is often medical (creams, venotonics) or instrumental.",
    ),
    (
        "What is irritable bowel syndrome?",
        "It is a frequent functional disorder associating abdominal pain and transit disorders (diarrhea/constipation), not serious but bothersome.",
    ),
    (
        "What foods to avoid for reflux?",
        "Avoid coffee, alcohol, spices, fats, chocolate, and carbonated drinks. Do not lie down right after a meal.",
    ),
    (
        "What is Crohn's disease?",
        "It is a chronic inflammatory bowel disease (IBD) that can affect the entire digestive tract. It manifests as pain, diarrhea, and fatigue.",
    ),
];

const FAQS_ES: &[(&str, &str)] = &[
    (
        "¿Cómo pedir cita?",
        "Puede pedir cita por teléfono al 40 81 48 48, en Maiia, o a través del formulario de contacto en el sitio web.",
    ),
    (
        "¿Debo estar en ayunas antes de una endoscopia?",
        "Sí, generalmente 6 horas sin comer y 2 horas sin beber líquidos claros, salvo indicación contraria.",
    ),
    (
        "¿Puedo conducir después de la anestesia?",
        "No, traiga un acompañante. No conduzca ni firme documentos importantes el mismo día.",
    ),
    (
        "¿Qué es una colonoscopia?",
        "Es un examen para explorar el interior del colon con una cámara flexible, para detectar pólipos o enfermedades.",
    ),
    (
        "¿Cuánto dura una colonoscopia?",
        "Unos 20 a 30 minutos, más el tiempo de preparación y recuperación.",
    ),
    (
        "¿Cuándo consultar de urgencia?",
        "Fiebre alta, sangre en las heces, dolor abdominal intenso, vómitos repetidos: llame o vaya a urgencias.",
    ),
    (
        "¿Cuáles son los horarios de consulta?",
        "El consultorio está abierto de lunes a viernes de 7:00 a 17:00, y el sábado de 8:30 a 12:00.",
    ),
    (
        "¿Cómo funciona el pago?",
        "El pago se realiza en el lugar con cheque, efectivo o tarjeta bancaria. El pago de terceros es posible según su cobertura.",
    ),
    (
        "¿Dónde aparcar para venir al consultorio?",
        "Hay aparcamientos públicos disponibles cerca del edificio Air France (aparcamiento Tarahoi o frente al mar).",
    ),
    (
        "¿Cuánto tiempo tardan los resultados?",
        "El informe se entrega inmediatamente después del examen. Los resultados de las biopsias tardan unos 10 a 15 días.",
    ),
    (
        "¿Hay riesgos al hacerse una colonoscopia?",
        "Los riesgos (perforación, hemorragia) son muy raros. El beneficio del cribado del cáncer colorrectal es muy superior.",
    ),
    (
        "¿Qué alimentos evitar para el reflujo?",
        "Evite café, alcohol, especias, grasas, chocolate y bebidas gaseosas. No se acueste justo después de comer.",
    ),
];
