/*
 * qrcx
 * Copyright (c) 2026 The qrcx authors.
 *
 * This program is free software: you can redistribute it and/or modify it under
 * the terms of the GNU General Public License as published by the Free Software
 * Foundation, either version 3 of the License, or (at your option) any later
 * version.
 *
 * This program is distributed in the hope that it will be useful, but WITHOUT ANY
 * WARRANTY; without even the implied warranty of  MERCHANTABILITY or FITNESS FOR
 * A PARTICULAR PURPOSE. See the GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License along with
 * this program.  If not, see <http://www.gnu.org/licenses/>.
 */

// Tables hand-transcribed from Qt 5.13's qlocale.h.
//
// Each enum carries one variant per 16-bit code, named after the first name
// qlocale.h declares for that code; the remaining names are deprecated Qt
// aliases and collapse onto the canonical variants as associated constants.

/// A language supported by Qt (note: multiple names can have the same code).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::FromRepr)]
#[repr(u16)]
pub enum Language {
  AnyLanguage = 0,
  C = 1,
  Abkhazian = 2,
  Oromo = 3,
  Afar = 4,
  Afrikaans = 5,
  Albanian = 6,
  Amharic = 7,
  Arabic = 8,
  Armenian = 9,
  Assamese = 10,
  Aymara = 11,
  Azerbaijani = 12,
  Bashkir = 13,
  Basque = 14,
  Bengali = 15,
  Dzongkha = 16,
  Bihari = 17,
  Bislama = 18,
  Breton = 19,
  Bulgarian = 20,
  Burmese = 21,
  Belarusian = 22,
  Khmer = 23,
  Catalan = 24,
  Chinese = 25,
  Corsican = 26,
  Croatian = 27,
  Czech = 28,
  Danish = 29,
  Dutch = 30,
  English = 31,
  Esperanto = 32,
  Estonian = 33,
  Faroese = 34,
  Fijian = 35,
  Finnish = 36,
  French = 37,
  WesternFrisian = 38,
  Gaelic = 39,
  Galician = 40,
  Georgian = 41,
  German = 42,
  Greek = 43,
  Greenlandic = 44,
  Guarani = 45,
  Gujarati = 46,
  Hausa = 47,
  Hebrew = 48,
  Hindi = 49,
  Hungarian = 50,
  Icelandic = 51,
  Indonesian = 52,
  Interlingua = 53,
  Interlingue = 54,
  Inuktitut = 55,
  Inupiak = 56,
  Irish = 57,
  Italian = 58,
  Japanese = 59,
  Javanese = 60,
  Kannada = 61,
  Kashmiri = 62,
  Kazakh = 63,
  Kinyarwanda = 64,
  Kirghiz = 65,
  Korean = 66,
  Kurdish = 67,
  Rundi = 68,
  Lao = 69,
  Latin = 70,
  Latvian = 71,
  Lingala = 72,
  Lithuanian = 73,
  Macedonian = 74,
  Malagasy = 75,
  Malay = 76,
  Malayalam = 77,
  Maltese = 78,
  Maori = 79,
  Marathi = 80,
  Marshallese = 81,
  Mongolian = 82,
  NauruLanguage = 83,
  Nepali = 84,
  NorwegianBokmal = 85,
  Occitan = 86,
  Oriya = 87,
  Pashto = 88,
  Persian = 89,
  Polish = 90,
  Portuguese = 91,
  Punjabi = 92,
  Quechua = 93,
  Romansh = 94,
  Romanian = 95,
  Russian = 96,
  Samoan = 97,
  Sango = 98,
  Sanskrit = 99,
  Serbian = 100,
  Ossetic = 101,
  SouthernSotho = 102,
  Tswana = 103,
  Shona = 104,
  Sindhi = 105,
  Sinhala = 106,
  Swati = 107,
  Slovak = 108,
  Slovenian = 109,
  Somali = 110,
  Spanish = 111,
  Sundanese = 112,
  Swahili = 113,
  Swedish = 114,
  Sardinian = 115,
  Tajik = 116,
  Tamil = 117,
  Tatar = 118,
  Telugu = 119,
  Thai = 120,
  Tibetan = 121,
  Tigrinya = 122,
  Tongan = 123,
  Tsonga = 124,
  Turkish = 125,
  Turkmen = 126,
  Tahitian = 127,
  Uigur = 128,
  Ukrainian = 129,
  Urdu = 130,
  Uzbek = 131,
  Vietnamese = 132,
  Volapuk = 133,
  Welsh = 134,
  Wolof = 135,
  Xhosa = 136,
  Yiddish = 137,
  Yoruba = 138,
  Zhuang = 139,
  Zulu = 140,
  NorwegianNynorsk = 141,
  Bosnian = 142,
  Divehi = 143,
  Manx = 144,
  Cornish = 145,
  Akan = 146,
  Konkani = 147,
  Ga = 148,
  Igbo = 149,
  Kamba = 150,
  Syriac = 151,
  Blin = 152,
  Geez = 153,
  Koro = 154,
  Sidamo = 155,
  Atsam = 156,
  Tigre = 157,
  Jju = 158,
  Friulian = 159,
  Venda = 160,
  Ewe = 161,
  Walamo = 162,
  Hawaiian = 163,
  Tyap = 164,
  Nyanja = 165,
  Filipino = 166,
  SwissGerman = 167,
  SichuanYi = 168,
  Kpelle = 169,
  LowGerman = 170,
  SouthNdebele = 171,
  NorthernSotho = 172,
  NorthernSami = 173,
  Taroko = 174,
  Gusii = 175,
  Taita = 176,
  Fulah = 177,
  Kikuyu = 178,
  Samburu = 179,
  Sena = 180,
  NorthNdebele = 181,
  Rombo = 182,
  Tachelhit = 183,
  Kabyle = 184,
  Nyankole = 185,
  Bena = 186,
  Vunjo = 187,
  Bambara = 188,
  Embu = 189,
  Cherokee = 190,
  Morisyen = 191,
  Makonde = 192,
  Langi = 193,
  Ganda = 194,
  Bemba = 195,
  Kabuverdianu = 196,
  Meru = 197,
  Kalenjin = 198,
  Nama = 199,
  Machame = 200,
  Colognian = 201,
  Masai = 202,
  Soga = 203,
  Luyia = 204,
  Asu = 205,
  Teso = 206,
  Saho = 207,
  KoyraChiini = 208,
  Rwa = 209,
  Luo = 210,
  Chiga = 211,
  CentralMoroccoTamazight = 212,
  KoyraboroSenni = 213,
  Shambala = 214,
  Bodo = 215,
  Avaric = 216,
  Chamorro = 217,
  Chechen = 218,
  Church = 219,
  Chuvash = 220,
  Cree = 221,
  Haitian = 222,
  Herero = 223,
  HiriMotu = 224,
  Kanuri = 225,
  Komi = 226,
  Kongo = 227,
  Kwanyama = 228,
  Limburgish = 229,
  LubaKatanga = 230,
  Luxembourgish = 231,
  Navaho = 232,
  Ndonga = 233,
  Ojibwa = 234,
  Pali = 235,
  Walloon = 236,
  Aghem = 237,
  Basaa = 238,
  Zarma = 239,
  Duala = 240,
  JolaFonyi = 241,
  Ewondo = 242,
  Bafia = 243,
  MakhuwaMeetto = 244,
  Mundang = 245,
  Kwasio = 246,
  Nuer = 247,
  Sakha = 248,
  Sangu = 249,
  CongoSwahili = 250,
  Tasawaq = 251,
  Vai = 252,
  Walser = 253,
  Yangben = 254,
  Avestan = 255,
  Asturian = 256,
  Ngomba = 257,
  Kako = 258,
  Meta = 259,
  Ngiemboon = 260,
  Aragonese = 261,
  Akkadian = 262,
  AncientEgyptian = 263,
  AncientGreek = 264,
  Aramaic = 265,
  Balinese = 266,
  Bamun = 267,
  BatakToba = 268,
  Buginese = 269,
  Buhid = 270,
  Carian = 271,
  Chakma = 272,
  ClassicalMandaic = 273,
  Coptic = 274,
  Dogri = 275,
  EasternCham = 276,
  EasternKayah = 277,
  Etruscan = 278,
  Gothic = 279,
  Hanunoo = 280,
  Ingush = 281,
  LargeFloweryMiao = 282,
  Lepcha = 283,
  Limbu = 284,
  Lisu = 285,
  Lu = 286,
  Lycian = 287,
  Lydian = 288,
  Mandingo = 289,
  Manipuri = 290,
  Meroitic = 291,
  NorthernThai = 292,
  OldIrish = 293,
  OldNorse = 294,
  OldPersian = 295,
  OldTurkish = 296,
  Pahlavi = 297,
  Parthian = 298,
  Phoenician = 299,
  PrakritLanguage = 300,
  Rejang = 301,
  Sabaean = 302,
  Samaritan = 303,
  Santali = 304,
  Saurashtra = 305,
  Sora = 306,
  Sylheti = 307,
  Tagbanwa = 308,
  TaiDam = 309,
  TaiNua = 310,
  Ugaritic = 311,
  Akoose = 312,
  Lakota = 313,
  StandardMoroccanTamazight = 314,
  Mapuche = 315,
  CentralKurdish = 316,
  LowerSorbian = 317,
  UpperSorbian = 318,
  Kenyang = 319,
  Mohawk = 320,
  Nko = 321,
  Prussian = 322,
  Kiche = 323,
  SouthernSami = 324,
  LuleSami = 325,
  InariSami = 326,
  SkoltSami = 327,
  Warlpiri = 328,
  ManichaeanMiddlePersian = 329,
  Mende = 330,
  AncientNorthArabian = 331,
  LinearA = 332,
  HmongNjua = 333,
  Ho = 334,
  Lezghian = 335,
  Bassa = 336,
  Mono = 337,
  TedimChin = 338,
  Maithili = 339,
  Ahom = 340,
  AmericanSignLanguage = 341,
  ArdhamagadhiPrakrit = 342,
  Bhojpuri = 343,
  HieroglyphicLuwian = 344,
  LiteraryChinese = 345,
  Mazanderani = 346,
  Mru = 347,
  Newari = 348,
  NorthernLuri = 349,
  Palauan = 350,
  Papiamento = 351,
  Saraiki = 352,
  TokelauLanguage = 353,
  TokPisin = 354,
  TuvaluLanguage = 355,
  UncodedLanguages = 356,
  Cantonese = 357,
  Osage = 358,
  Tangut = 359,
  Ido = 360,
  Lojban = 361,
  Sicilian = 362,
  SouthernKurdish = 363,
  WesternBalochi = 364,
  Cebuano = 365,
  Erzya = 366,
  Chickasaw = 367,
  Muscogee = 368,
  Silesian = 369,
  NigerianPidgin = 370,
}

#[allow(non_upper_case_globals)]
impl Language {
  pub const Afan: Language = Language::Oromo;
  pub const Bhutani: Language = Language::Dzongkha;
  pub const Byelorussian: Language = Language::Belarusian;
  pub const Cambodian: Language = Language::Khmer;
  pub const Chewa: Language = Language::Nyanja;
  pub const Frisian: Language = Language::WesternFrisian;
  pub const Kurundi: Language = Language::Rundi;
  pub const Moldavian: Language = Language::Romanian;
  pub const Norwegian: Language = Language::NorwegianBokmal;
  pub const RhaetoRomance: Language = Language::Romansh;
  pub const SerboCroatian: Language = Language::Serbian;
  pub const Tagalog: Language = Language::Filipino;
  pub const Twi: Language = Language::Akan;
  pub const Uighur: Language = Language::Uigur;

  pub fn code(self) -> u16 {
    self as u16
  }
}

/// A country supported by Qt (note: multiple names can have the same code).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::FromRepr)]
#[repr(u16)]
pub enum Country {
  AnyCountry = 0,
  Afghanistan = 1,
  Albania = 2,
  Algeria = 3,
  AmericanSamoa = 4,
  Andorra = 5,
  Angola = 6,
  Anguilla = 7,
  Antarctica = 8,
  AntiguaAndBarbuda = 9,
  Argentina = 10,
  Armenia = 11,
  Aruba = 12,
  Australia = 13,
  Austria = 14,
  Azerbaijan = 15,
  Bahamas = 16,
  Bahrain = 17,
  Bangladesh = 18,
  Barbados = 19,
  Belarus = 20,
  Belgium = 21,
  Belize = 22,
  Benin = 23,
  Bermuda = 24,
  Bhutan = 25,
  Bolivia = 26,
  BosniaAndHerzegowina = 27,
  Botswana = 28,
  BouvetIsland = 29,
  Brazil = 30,
  BritishIndianOceanTerritory = 31,
  Brunei = 32,
  Bulgaria = 33,
  BurkinaFaso = 34,
  Burundi = 35,
  Cambodia = 36,
  Cameroon = 37,
  Canada = 38,
  CapeVerde = 39,
  CaymanIslands = 40,
  CentralAfricanRepublic = 41,
  Chad = 42,
  Chile = 43,
  China = 44,
  ChristmasIsland = 45,
  CocosIslands = 46,
  Colombia = 47,
  Comoros = 48,
  CongoKinshasa = 49,
  CongoBrazzaville = 50,
  CookIslands = 51,
  CostaRica = 52,
  IvoryCoast = 53,
  Croatia = 54,
  Cuba = 55,
  Cyprus = 56,
  CzechRepublic = 57,
  Denmark = 58,
  Djibouti = 59,
  Dominica = 60,
  DominicanRepublic = 61,
  EastTimor = 62,
  Ecuador = 63,
  Egypt = 64,
  ElSalvador = 65,
  EquatorialGuinea = 66,
  Eritrea = 67,
  Estonia = 68,
  Ethiopia = 69,
  FalklandIslands = 70,
  FaroeIslands = 71,
  Fiji = 72,
  Finland = 73,
  France = 74,
  Guernsey = 75,
  FrenchGuiana = 76,
  FrenchPolynesia = 77,
  FrenchSouthernTerritories = 78,
  Gabon = 79,
  Gambia = 80,
  Georgia = 81,
  Germany = 82,
  Ghana = 83,
  Gibraltar = 84,
  Greece = 85,
  Greenland = 86,
  Grenada = 87,
  Guadeloupe = 88,
  Guam = 89,
  Guatemala = 90,
  Guinea = 91,
  GuineaBissau = 92,
  Guyana = 93,
  Haiti = 94,
  HeardAndMcDonaldIslands = 95,
  Honduras = 96,
  HongKong = 97,
  Hungary = 98,
  Iceland = 99,
  India = 100,
  Indonesia = 101,
  Iran = 102,
  Iraq = 103,
  Ireland = 104,
  Israel = 105,
  Italy = 106,
  Jamaica = 107,
  Japan = 108,
  Jordan = 109,
  Kazakhstan = 110,
  Kenya = 111,
  Kiribati = 112,
  NorthKorea = 113,
  SouthKorea = 114,
  Kuwait = 115,
  Kyrgyzstan = 116,
  Laos = 117,
  Latvia = 118,
  Lebanon = 119,
  Lesotho = 120,
  Liberia = 121,
  Libya = 122,
  Liechtenstein = 123,
  Lithuania = 124,
  Luxembourg = 125,
  Macau = 126,
  Macedonia = 127,
  Madagascar = 128,
  Malawi = 129,
  Malaysia = 130,
  Maldives = 131,
  Mali = 132,
  Malta = 133,
  MarshallIslands = 134,
  Martinique = 135,
  Mauritania = 136,
  Mauritius = 137,
  Mayotte = 138,
  Mexico = 139,
  Micronesia = 140,
  Moldova = 141,
  Monaco = 142,
  Mongolia = 143,
  Montserrat = 144,
  Morocco = 145,
  Mozambique = 146,
  Myanmar = 147,
  Namibia = 148,
  Nauru = 149,
  Nepal = 150,
  Netherlands = 151,
  CuraSao = 152,
  NewCaledonia = 153,
  NewZealand = 154,
  Nicaragua = 155,
  Niger = 156,
  Nigeria = 157,
  Niue = 158,
  NorfolkIsland = 159,
  NorthernMarianaIslands = 160,
  Norway = 161,
  Oman = 162,
  Pakistan = 163,
  Palau = 164,
  PalestinianTerritories = 165,
  Panama = 166,
  PapuaNewGuinea = 167,
  Paraguay = 168,
  Peru = 169,
  Philippines = 170,
  Pitcairn = 171,
  Poland = 172,
  Portugal = 173,
  PuertoRico = 174,
  Qatar = 175,
  Reunion = 176,
  Romania = 177,
  Russia = 178,
  Rwanda = 179,
  SaintKittsAndNevis = 180,
  SaintLucia = 181,
  SaintVincentAndTheGrenadines = 182,
  Samoa = 183,
  SanMarino = 184,
  SaoTomeAndPrincipe = 185,
  SaudiArabia = 186,
  Senegal = 187,
  Seychelles = 188,
  SierraLeone = 189,
  Singapore = 190,
  Slovakia = 191,
  Slovenia = 192,
  SolomonIslands = 193,
  Somalia = 194,
  SouthAfrica = 195,
  SouthGeorgiaAndTheSouthSandwichIslands = 196,
  Spain = 197,
  SriLanka = 198,
  SaintHelena = 199,
  Sudan = 200,
  Suriname = 201,
  SvalbardAndJanMayenIslands = 202,
  Swaziland = 203,
  Sweden = 204,
  Switzerland = 205,
  Syria = 206,
  Taiwan = 207,
  Tajikistan = 208,
  Tanzania = 209,
  Thailand = 210,
  Togo = 211,
  Tokelau = 212,
  Tonga = 213,
  TrinidadAndTobago = 214,
  Tunisia = 215,
  Turkey = 216,
  Turkmenistan = 217,
  TurksAndCaicosIslands = 218,
  Tuvalu = 219,
  Uganda = 220,
  Ukraine = 221,
  UnitedArabEmirates = 222,
  UnitedKingdom = 223,
  UnitedStates = 224,
  UnitedStatesMinorOutlyingIslands = 225,
  Uruguay = 226,
  Uzbekistan = 227,
  Vanuatu = 228,
  VaticanCityState = 229,
  Venezuela = 230,
  Vietnam = 231,
  BritishVirginIslands = 232,
  UnitedStatesVirginIslands = 233,
  WallisAndFutunaIslands = 234,
  WesternSahara = 235,
  Yemen = 236,
  CanaryIslands = 237,
  Montenegro = 238,
  Serbia = 239,
  SaintBarthelemy = 240,
  SaintMartin = 241,
  LatinAmerica = 242,
  AscensionIsland = 243,
  AlandIslands = 244,
  DiegoGarcia = 245,
  CeutaAndMelilla = 246,
  ClippertonIsland = 247,
  Kosovo = 248,
  Bonaire = 249,
  SintMaarten = 250,
  SouthSudan = 251,
  OutlyingOceania = 252,
  World = 253,
  Europe = 254,
  EuropeanUnion = 255,
}

#[allow(non_upper_case_globals)]
impl Country {
  pub const DemocraticRepublicOfCongo: Country = Country::CongoKinshasa;
  pub const DemocraticRepublicOfKorea: Country = Country::NorthKorea;
  pub const LatinAmericaAndTheCaribbean: Country = Country::LatinAmerica;
  pub const NauruCountry: Country = Country::Nauru;
  pub const PeoplesRepublicOfCongo: Country = Country::CongoBrazzaville;
  pub const RepublicOfKorea: Country = Country::SouthKorea;
  pub const RussianFederation: Country = Country::Russia;
  pub const SyrianArabRepublic: Country = Country::Syria;
  pub const TokelauCountry: Country = Country::Tokelau;
  pub const TuvaluCountry: Country = Country::Tuvalu;

  pub fn code(self) -> u16 {
    self as u16
  }
}
