//! Redump system identifiers.
//!
//! One variant per system or arcade board the database tracks, with the
//! display name used on submission reports and the short code used in site
//! URLs. A handful of systems are known to the dumping tools but have no
//! database section yet; those carry a long name but no short code.

use serde::{Deserialize, Serialize};

use crate::media::MediaType;
use crate::names::{HumanReadable, human_readable_str};

/// Broad grouping the database uses to organize its system list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SystemCategory {
    DiscBasedConsole,
    OtherConsole,
    Computer,
    Arcade,
    Other,
}

const ALL_SYSTEM_CATEGORIES: &[SystemCategory] = &[
    SystemCategory::DiscBasedConsole,
    SystemCategory::OtherConsole,
    SystemCategory::Computer,
    SystemCategory::Arcade,
    SystemCategory::Other,
];

impl HumanReadable for SystemCategory {
    const KIND: &'static str = "system category";

    fn all() -> &'static [Self] {
        ALL_SYSTEM_CATEGORIES
    }

    fn long_name(&self) -> Option<&'static str> {
        Some(match self {
            Self::DiscBasedConsole => "Disc Based Console",
            Self::OtherConsole => "Other Console",
            Self::Computer => "Computer",
            Self::Arcade => "Arcade",
            Self::Other => "Other",
        })
    }
}

human_readable_str!(SystemCategory);

/// A system (console, computer, arcade board, or media family) in the
/// database's system list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RedumpSystem {
    // Disc-based consoles
    AtariJaguarCdInteractiveMultimediaSystem,
    BandaiPlaydiaQuickInteractiveSystem,
    BandaiPippin,
    CommodoreAmigaCd32,
    CommodoreAmigaCdtv,
    EnvizionsEvoSmartConsole,
    FujitsuFmTownsMarty,
    HasbroIonEducationalGamingSystem,
    HasbroVideoNow,
    HasbroVideoNowColor,
    HasbroVideoNowJr,
    HasbroVideoNowXp,
    MattelFisherPriceIxl,
    MattelHyperScan,
    MemorexVisualInformationSystem,
    MicrosoftXbox,
    MicrosoftXbox360,
    MicrosoftXboxOne,
    MicrosoftXboxSeriesXs,
    NecPcEngineCdTurboGrafxCd,
    NecPcFxPcFxga,
    NintendoGameCube,
    NintendoSonySuperNesCdRomSystem,
    NintendoWii,
    NintendoWiiU,
    Panasonic3doInteractiveMultiplayer,
    PhilipsCdi,
    PioneerLaserActive,
    SegaDreamcast,
    SegaMegaCdSegaCd,
    SegaSaturn,
    SnkNeoGeoCd,
    SonyPlayStation,
    SonyPlayStation2,
    SonyPlayStation3,
    SonyPlayStation4,
    SonyPlayStation5,
    SonyPlayStationPortable,
    VmLabsNuon,
    VTechVFlashVSmilePro,
    ZapitGamesGameWaveFamilyEntertainmentSystem,

    // Other consoles
    NintendoSwitch,
    SonyPlayStationVita,

    // Computers
    AcornArchimedes,
    AppleMacintosh,
    CommodoreAmigaCd,
    FujitsuFmTownsSeries,
    IbmPcCompatible,
    NecPc88Series,
    NecPc98Series,
    SharpX68000,

    // Arcade
    AmericanLaserGames3do,
    Atari3do,
    Atronic,
    AuscomSystem1,
    BallyGameMagic,
    CapcomCpSystemIii,
    FunworldPhotoPlay,
    GlobalVrVarious,
    GlobalVrVortek,
    GlobalVrVortekV3,
    IcePcHardware,
    IncredibleTechnologiesEagle,
    IncredibleTechnologiesVarious,
    KonamiEAmusement,
    KonamiFireBeat,
    KonamiM2,
    KonamiPython,
    KonamiPython2,
    KonamiSystem573,
    KonamiSystemGv,
    KonamiTwinkle,
    KonamiVarious,
    MeritIndustriesBoardwalk,
    MeritIndustriesMegaTouchForce,
    MeritIndustriesMegaTouchIon,
    MeritIndustriesMegaTouchMaxx,
    MeritIndustriesMegaTouchXl,
    NamcoSegaNintendoTriforce,
    NamcoSystem12,
    NamcoSystem246256,
    NewJatreCdi,
    NichibutsuHighRateSystem,
    NichibutsuSuperCd,
    NichibutsuXRateSystem,
    PanasonicM2,
    PhotoPlayVarious,
    RawThrillsVarious,
    SegaAlls,
    SegaChihiro,
    SegaEuropaR,
    SegaLindbergh,
    SegaNaomi,
    SegaNaomi2,
    SegaNu,
    SegaRingEdge,
    SegaRingEdge2,
    SegaRingWide,
    SegaSystem32,
    SegaTitanVideo,
    SeibuCatsSystem,
    TabAustriaQuizard,
    TsunamiTsuMoMultiGameMotionSystem,

    // Other
    AudioCd,
    BdVideo,
    DvdAudio,
    DvdVideo,
    EnhancedCd,
    HdDvdVideo,
    NavisoftNaviken21,
    PalmOs,
    PhotoCd,
    PlayStationGameSharkUpdates,
    PocketPc,
    RainbowDisc,
    SegaPrologue21MultimediaKaraokeSystem,
    SonyElectronicBook,
    SuperAudioCd,
    TaoIktv,
    TomyKissSite,
    VideoCd,
}

/// All systems in declaration order.
const ALL_SYSTEMS: &[RedumpSystem] = &[
    RedumpSystem::AtariJaguarCdInteractiveMultimediaSystem,
    RedumpSystem::BandaiPlaydiaQuickInteractiveSystem,
    RedumpSystem::BandaiPippin,
    RedumpSystem::CommodoreAmigaCd32,
    RedumpSystem::CommodoreAmigaCdtv,
    RedumpSystem::EnvizionsEvoSmartConsole,
    RedumpSystem::FujitsuFmTownsMarty,
    RedumpSystem::HasbroIonEducationalGamingSystem,
    RedumpSystem::HasbroVideoNow,
    RedumpSystem::HasbroVideoNowColor,
    RedumpSystem::HasbroVideoNowJr,
    RedumpSystem::HasbroVideoNowXp,
    RedumpSystem::MattelFisherPriceIxl,
    RedumpSystem::MattelHyperScan,
    RedumpSystem::MemorexVisualInformationSystem,
    RedumpSystem::MicrosoftXbox,
    RedumpSystem::MicrosoftXbox360,
    RedumpSystem::MicrosoftXboxOne,
    RedumpSystem::MicrosoftXboxSeriesXs,
    RedumpSystem::NecPcEngineCdTurboGrafxCd,
    RedumpSystem::NecPcFxPcFxga,
    RedumpSystem::NintendoGameCube,
    RedumpSystem::NintendoSonySuperNesCdRomSystem,
    RedumpSystem::NintendoWii,
    RedumpSystem::NintendoWiiU,
    RedumpSystem::Panasonic3doInteractiveMultiplayer,
    RedumpSystem::PhilipsCdi,
    RedumpSystem::PioneerLaserActive,
    RedumpSystem::SegaDreamcast,
    RedumpSystem::SegaMegaCdSegaCd,
    RedumpSystem::SegaSaturn,
    RedumpSystem::SnkNeoGeoCd,
    RedumpSystem::SonyPlayStation,
    RedumpSystem::SonyPlayStation2,
    RedumpSystem::SonyPlayStation3,
    RedumpSystem::SonyPlayStation4,
    RedumpSystem::SonyPlayStation5,
    RedumpSystem::SonyPlayStationPortable,
    RedumpSystem::VmLabsNuon,
    RedumpSystem::VTechVFlashVSmilePro,
    RedumpSystem::ZapitGamesGameWaveFamilyEntertainmentSystem,
    RedumpSystem::NintendoSwitch,
    RedumpSystem::SonyPlayStationVita,
    RedumpSystem::AcornArchimedes,
    RedumpSystem::AppleMacintosh,
    RedumpSystem::CommodoreAmigaCd,
    RedumpSystem::FujitsuFmTownsSeries,
    RedumpSystem::IbmPcCompatible,
    RedumpSystem::NecPc88Series,
    RedumpSystem::NecPc98Series,
    RedumpSystem::SharpX68000,
    RedumpSystem::AmericanLaserGames3do,
    RedumpSystem::Atari3do,
    RedumpSystem::Atronic,
    RedumpSystem::AuscomSystem1,
    RedumpSystem::BallyGameMagic,
    RedumpSystem::CapcomCpSystemIii,
    RedumpSystem::FunworldPhotoPlay,
    RedumpSystem::GlobalVrVarious,
    RedumpSystem::GlobalVrVortek,
    RedumpSystem::GlobalVrVortekV3,
    RedumpSystem::IcePcHardware,
    RedumpSystem::IncredibleTechnologiesEagle,
    RedumpSystem::IncredibleTechnologiesVarious,
    RedumpSystem::KonamiEAmusement,
    RedumpSystem::KonamiFireBeat,
    RedumpSystem::KonamiM2,
    RedumpSystem::KonamiPython,
    RedumpSystem::KonamiPython2,
    RedumpSystem::KonamiSystem573,
    RedumpSystem::KonamiSystemGv,
    RedumpSystem::KonamiTwinkle,
    RedumpSystem::KonamiVarious,
    RedumpSystem::MeritIndustriesBoardwalk,
    RedumpSystem::MeritIndustriesMegaTouchForce,
    RedumpSystem::MeritIndustriesMegaTouchIon,
    RedumpSystem::MeritIndustriesMegaTouchMaxx,
    RedumpSystem::MeritIndustriesMegaTouchXl,
    RedumpSystem::NamcoSegaNintendoTriforce,
    RedumpSystem::NamcoSystem12,
    RedumpSystem::NamcoSystem246256,
    RedumpSystem::NewJatreCdi,
    RedumpSystem::NichibutsuHighRateSystem,
    RedumpSystem::NichibutsuSuperCd,
    RedumpSystem::NichibutsuXRateSystem,
    RedumpSystem::PanasonicM2,
    RedumpSystem::PhotoPlayVarious,
    RedumpSystem::RawThrillsVarious,
    RedumpSystem::SegaAlls,
    RedumpSystem::SegaChihiro,
    RedumpSystem::SegaEuropaR,
    RedumpSystem::SegaLindbergh,
    RedumpSystem::SegaNaomi,
    RedumpSystem::SegaNaomi2,
    RedumpSystem::SegaNu,
    RedumpSystem::SegaRingEdge,
    RedumpSystem::SegaRingEdge2,
    RedumpSystem::SegaRingWide,
    RedumpSystem::SegaSystem32,
    RedumpSystem::SegaTitanVideo,
    RedumpSystem::SeibuCatsSystem,
    RedumpSystem::TabAustriaQuizard,
    RedumpSystem::TsunamiTsuMoMultiGameMotionSystem,
    RedumpSystem::AudioCd,
    RedumpSystem::BdVideo,
    RedumpSystem::DvdAudio,
    RedumpSystem::DvdVideo,
    RedumpSystem::EnhancedCd,
    RedumpSystem::HdDvdVideo,
    RedumpSystem::NavisoftNaviken21,
    RedumpSystem::PalmOs,
    RedumpSystem::PhotoCd,
    RedumpSystem::PlayStationGameSharkUpdates,
    RedumpSystem::PocketPc,
    RedumpSystem::RainbowDisc,
    RedumpSystem::SegaPrologue21MultimediaKaraokeSystem,
    RedumpSystem::SonyElectronicBook,
    RedumpSystem::SuperAudioCd,
    RedumpSystem::TaoIktv,
    RedumpSystem::TomyKissSite,
    RedumpSystem::VideoCd,
];

impl RedumpSystem {
    /// Which section of the database's system list this system lives in.
    pub fn category(&self) -> SystemCategory {
        match self {
            Self::AtariJaguarCdInteractiveMultimediaSystem
            | Self::BandaiPlaydiaQuickInteractiveSystem
            | Self::BandaiPippin
            | Self::CommodoreAmigaCd32
            | Self::CommodoreAmigaCdtv
            | Self::EnvizionsEvoSmartConsole
            | Self::FujitsuFmTownsMarty
            | Self::HasbroIonEducationalGamingSystem
            | Self::HasbroVideoNow
            | Self::HasbroVideoNowColor
            | Self::HasbroVideoNowJr
            | Self::HasbroVideoNowXp
            | Self::MattelFisherPriceIxl
            | Self::MattelHyperScan
            | Self::MemorexVisualInformationSystem
            | Self::MicrosoftXbox
            | Self::MicrosoftXbox360
            | Self::MicrosoftXboxOne
            | Self::MicrosoftXboxSeriesXs
            | Self::NecPcEngineCdTurboGrafxCd
            | Self::NecPcFxPcFxga
            | Self::NintendoGameCube
            | Self::NintendoSonySuperNesCdRomSystem
            | Self::NintendoWii
            | Self::NintendoWiiU
            | Self::Panasonic3doInteractiveMultiplayer
            | Self::PhilipsCdi
            | Self::PioneerLaserActive
            | Self::SegaDreamcast
            | Self::SegaMegaCdSegaCd
            | Self::SegaSaturn
            | Self::SnkNeoGeoCd
            | Self::SonyPlayStation
            | Self::SonyPlayStation2
            | Self::SonyPlayStation3
            | Self::SonyPlayStation4
            | Self::SonyPlayStation5
            | Self::SonyPlayStationPortable
            | Self::VmLabsNuon
            | Self::VTechVFlashVSmilePro
            | Self::ZapitGamesGameWaveFamilyEntertainmentSystem => SystemCategory::DiscBasedConsole,

            Self::NintendoSwitch
            | Self::SonyPlayStationVita => SystemCategory::OtherConsole,

            Self::AcornArchimedes
            | Self::AppleMacintosh
            | Self::CommodoreAmigaCd
            | Self::FujitsuFmTownsSeries
            | Self::IbmPcCompatible
            | Self::NecPc88Series
            | Self::NecPc98Series
            | Self::SharpX68000 => SystemCategory::Computer,

            Self::AmericanLaserGames3do
            | Self::Atari3do
            | Self::Atronic
            | Self::AuscomSystem1
            | Self::BallyGameMagic
            | Self::CapcomCpSystemIii
            | Self::FunworldPhotoPlay
            | Self::GlobalVrVarious
            | Self::GlobalVrVortek
            | Self::GlobalVrVortekV3
            | Self::IcePcHardware
            | Self::IncredibleTechnologiesEagle
            | Self::IncredibleTechnologiesVarious
            | Self::KonamiEAmusement
            | Self::KonamiFireBeat
            | Self::KonamiM2
            | Self::KonamiPython
            | Self::KonamiPython2
            | Self::KonamiSystem573
            | Self::KonamiSystemGv
            | Self::KonamiTwinkle
            | Self::KonamiVarious
            | Self::MeritIndustriesBoardwalk
            | Self::MeritIndustriesMegaTouchForce
            | Self::MeritIndustriesMegaTouchIon
            | Self::MeritIndustriesMegaTouchMaxx
            | Self::MeritIndustriesMegaTouchXl
            | Self::NamcoSegaNintendoTriforce
            | Self::NamcoSystem12
            | Self::NamcoSystem246256
            | Self::NewJatreCdi
            | Self::NichibutsuHighRateSystem
            | Self::NichibutsuSuperCd
            | Self::NichibutsuXRateSystem
            | Self::PanasonicM2
            | Self::PhotoPlayVarious
            | Self::RawThrillsVarious
            | Self::SegaAlls
            | Self::SegaChihiro
            | Self::SegaEuropaR
            | Self::SegaLindbergh
            | Self::SegaNaomi
            | Self::SegaNaomi2
            | Self::SegaNu
            | Self::SegaRingEdge
            | Self::SegaRingEdge2
            | Self::SegaRingWide
            | Self::SegaSystem32
            | Self::SegaTitanVideo
            | Self::SeibuCatsSystem
            | Self::TabAustriaQuizard
            | Self::TsunamiTsuMoMultiGameMotionSystem => SystemCategory::Arcade,

            Self::AudioCd
            | Self::BdVideo
            | Self::DvdAudio
            | Self::DvdVideo
            | Self::EnhancedCd
            | Self::HdDvdVideo
            | Self::NavisoftNaviken21
            | Self::PalmOs
            | Self::PhotoCd
            | Self::PlayStationGameSharkUpdates
            | Self::PocketPc
            | Self::RainbowDisc
            | Self::SegaPrologue21MultimediaKaraokeSystem
            | Self::SonyElectronicBook
            | Self::SuperAudioCd
            | Self::TaoIktv
            | Self::TomyKissSite
            | Self::VideoCd => SystemCategory::Other,
        }
    }

    /// Whether the manufacturer prints ring codes in reverse layer order.
    ///
    /// On these systems the outermost physical layer is authored first, so
    /// multi-layer ring code labels swap their Inner/Outer annotations.
    pub fn has_reversed_ringcodes(&self) -> bool {
        matches!(
            self,
            Self::SonyPlayStation2
                | Self::SonyPlayStation3
                | Self::SonyPlayStation4
                | Self::SonyPlayStation5
                | Self::SonyPlayStationPortable
        )
    }

    /// Whether discs for this system are Xbox Game Discs (XGD), whose
    /// layerbreak the database derives on its own.
    pub fn is_xgd(&self) -> bool {
        matches!(self, Self::MicrosoftXbox | Self::MicrosoftXbox360)
    }

    /// Whether submissions for this system carry an EDC section.
    pub fn has_edc(&self) -> bool {
        matches!(self, Self::SonyPlayStation)
    }

    /// Whether the anti-modchip / LibCrypt protection fields apply.
    pub fn has_libcrypt(&self) -> bool {
        matches!(self, Self::SonyPlayStation)
    }

    /// The only physical media family this system ships on, if there is one.
    pub fn detected_media(&self) -> Option<MediaType> {
        match self {
            Self::AtariJaguarCdInteractiveMultimediaSystem
            | Self::BandaiPlaydiaQuickInteractiveSystem
            | Self::BandaiPippin
            | Self::CommodoreAmigaCd32
            | Self::CommodoreAmigaCdtv
            | Self::FujitsuFmTownsMarty
            | Self::NecPcEngineCdTurboGrafxCd
            | Self::NecPcFxPcFxga
            | Self::NintendoSonySuperNesCdRomSystem
            | Self::Panasonic3doInteractiveMultiplayer
            | Self::PhilipsCdi
            | Self::SegaMegaCdSegaCd
            | Self::SegaSaturn
            | Self::SnkNeoGeoCd
            | Self::SonyPlayStation
            | Self::AudioCd
            | Self::EnhancedCd
            | Self::PhotoCd
            | Self::SuperAudioCd
            | Self::VideoCd => Some(MediaType::CdRom),
            Self::MicrosoftXbox
            | Self::MicrosoftXbox360
            | Self::DvdAudio
            | Self::DvdVideo => Some(MediaType::Dvd),
            Self::MicrosoftXboxOne
            | Self::MicrosoftXboxSeriesXs
            | Self::SonyPlayStation3
            | Self::SonyPlayStation4
            | Self::SonyPlayStation5
            | Self::BdVideo => Some(MediaType::BluRay),
            Self::SegaDreamcast
            | Self::NamcoSegaNintendoTriforce
            | Self::SegaChihiro
            | Self::SegaNaomi
            | Self::SegaNaomi2 => Some(MediaType::GdRom),
            Self::HdDvdVideo => Some(MediaType::HdDvd),
            Self::SonyPlayStationPortable => Some(MediaType::Umd),
            Self::PioneerLaserActive => Some(MediaType::LaserDisc),
            Self::NintendoGameCube => Some(MediaType::NintendoGameCubeGameDisc),
            Self::NintendoWii => Some(MediaType::NintendoWiiOpticalDisc),
            Self::NintendoWiiU => Some(MediaType::NintendoWiiUOpticalDisc),
            _ => None,
        }
    }
}

impl HumanReadable for RedumpSystem {
    const KIND: &'static str = "system";

    fn all() -> &'static [Self] {
        ALL_SYSTEMS
    }

    fn long_name(&self) -> Option<&'static str> {
        Some(match self {
            Self::AtariJaguarCdInteractiveMultimediaSystem => "Atari Jaguar CD Interactive Multimedia System",
            Self::BandaiPlaydiaQuickInteractiveSystem => "Bandai Playdia Quick Interactive System",
            Self::BandaiPippin => "Bandai Pippin",
            Self::CommodoreAmigaCd32 => "Commodore Amiga CD32",
            Self::CommodoreAmigaCdtv => "Commodore Amiga CDTV",
            Self::EnvizionsEvoSmartConsole => "Envizions EVO Smart Console",
            Self::FujitsuFmTownsMarty => "Fujitsu FM Towns Marty",
            Self::HasbroIonEducationalGamingSystem => "Hasbro iON Educational Gaming System",
            Self::HasbroVideoNow => "Hasbro VideoNow",
            Self::HasbroVideoNowColor => "Hasbro VideoNow Color",
            Self::HasbroVideoNowJr => "Hasbro VideoNow Jr.",
            Self::HasbroVideoNowXp => "Hasbro VideoNow XP",
            Self::MattelFisherPriceIxl => "Mattel Fisher-Price iXL",
            Self::MattelHyperScan => "Mattel HyperScan",
            Self::MemorexVisualInformationSystem => "Memorex Visual Information System",
            Self::MicrosoftXbox => "Microsoft Xbox",
            Self::MicrosoftXbox360 => "Microsoft Xbox 360",
            Self::MicrosoftXboxOne => "Microsoft Xbox One",
            Self::MicrosoftXboxSeriesXs => "Microsoft Xbox Series X|S",
            Self::NecPcEngineCdTurboGrafxCd => "NEC PC Engine CD & TurboGrafx CD",
            Self::NecPcFxPcFxga => "NEC PC-FX & PC-FXGA",
            Self::NintendoGameCube => "Nintendo GameCube",
            Self::NintendoSonySuperNesCdRomSystem => "Nintendo-Sony Super NES CD-ROM System",
            Self::NintendoWii => "Nintendo Wii",
            Self::NintendoWiiU => "Nintendo Wii U",
            Self::Panasonic3doInteractiveMultiplayer => "Panasonic 3DO Interactive Multiplayer",
            Self::PhilipsCdi => "Philips CD-i",
            Self::PioneerLaserActive => "Pioneer LaserActive",
            Self::SegaDreamcast => "Sega Dreamcast",
            Self::SegaMegaCdSegaCd => "Sega Mega CD & Sega CD",
            Self::SegaSaturn => "Sega Saturn",
            Self::SnkNeoGeoCd => "SNK Neo Geo CD",
            Self::SonyPlayStation => "Sony PlayStation",
            Self::SonyPlayStation2 => "Sony PlayStation 2",
            Self::SonyPlayStation3 => "Sony PlayStation 3",
            Self::SonyPlayStation4 => "Sony PlayStation 4",
            Self::SonyPlayStation5 => "Sony PlayStation 5",
            Self::SonyPlayStationPortable => "Sony PlayStation Portable",
            Self::VmLabsNuon => "VM Labs NUON",
            Self::VTechVFlashVSmilePro => "VTech V.Flash & V.Smile Pro",
            Self::ZapitGamesGameWaveFamilyEntertainmentSystem => "ZAPiT Games Game Wave Family Entertainment System",
            Self::NintendoSwitch => "Nintendo Switch",
            Self::SonyPlayStationVita => "Sony PlayStation Vita",
            Self::AcornArchimedes => "Acorn Archimedes",
            Self::AppleMacintosh => "Apple Macintosh",
            Self::CommodoreAmigaCd => "Commodore Amiga CD",
            Self::FujitsuFmTownsSeries => "Fujitsu FM Towns series",
            Self::IbmPcCompatible => "IBM PC compatible",
            Self::NecPc88Series => "NEC PC-88 series",
            Self::NecPc98Series => "NEC PC-98 series",
            Self::SharpX68000 => "Sharp X68000",
            Self::AmericanLaserGames3do => "American Laser Games 3DO",
            Self::Atari3do => "Atari 3DO",
            Self::Atronic => "Atronic",
            Self::AuscomSystem1 => "AUSCOM System 1",
            Self::BallyGameMagic => "Bally Game Magic",
            Self::CapcomCpSystemIii => "Capcom CP System III",
            Self::FunworldPhotoPlay => "funworld Photo Play",
            Self::GlobalVrVarious => "Global VR PC-based Systems",
            Self::GlobalVrVortek => "Global VR Vortek",
            Self::GlobalVrVortekV3 => "Global VR Vortek V3",
            Self::IcePcHardware => "ICE PC-based Hardware",
            Self::IncredibleTechnologiesEagle => "Incredible Technologies Eagle",
            Self::IncredibleTechnologiesVarious => "Incredible Technologies PC-based Systems",
            Self::KonamiEAmusement => "Konami e-Amusement",
            Self::KonamiFireBeat => "Konami FireBeat",
            Self::KonamiM2 => "Konami M2",
            Self::KonamiPython => "Konami Python",
            Self::KonamiPython2 => "Konami Python 2",
            Self::KonamiSystem573 => "Konami System 573",
            Self::KonamiSystemGv => "Konami System GV",
            Self::KonamiTwinkle => "Konami Twinkle",
            Self::KonamiVarious => "Konami PC-based Systems",
            Self::MeritIndustriesBoardwalk => "Merit Industries Boardwalk",
            Self::MeritIndustriesMegaTouchForce => "Merit Industries MegaTouch Force",
            Self::MeritIndustriesMegaTouchIon => "Merit Industries MegaTouch ION",
            Self::MeritIndustriesMegaTouchMaxx => "Merit Industries MegaTouch Maxx",
            Self::MeritIndustriesMegaTouchXl => "Merit Industries MegaTouch XL",
            Self::NamcoSegaNintendoTriforce => "Namco / Sega / Nintendo Triforce",
            Self::NamcoSystem12 => "Namco System 12",
            Self::NamcoSystem246256 => "Namco System 246 / System 256",
            Self::NewJatreCdi => "New Jatre CD-i",
            Self::NichibutsuHighRateSystem => "Nichibutsu High Rate System",
            Self::NichibutsuSuperCd => "Nichibutsu Super CD",
            Self::NichibutsuXRateSystem => "Nichibutsu X-Rate System",
            Self::PanasonicM2 => "Panasonic M2",
            Self::PhotoPlayVarious => "PhotoPlay PC-based Systems",
            Self::RawThrillsVarious => "Raw Thrills PC-based Systems",
            Self::SegaAlls => "Sega ALLS",
            Self::SegaChihiro => "Sega Chihiro",
            Self::SegaEuropaR => "Sega Europa-R",
            Self::SegaLindbergh => "Sega Lindbergh",
            Self::SegaNaomi => "Sega Naomi",
            Self::SegaNaomi2 => "Sega Naomi 2",
            Self::SegaNu => "Sega Nu",
            Self::SegaRingEdge => "Sega RingEdge",
            Self::SegaRingEdge2 => "Sega RingEdge 2",
            Self::SegaRingWide => "Sega RingWide",
            Self::SegaSystem32 => "Sega System 32",
            Self::SegaTitanVideo => "Sega Titan Video",
            Self::SeibuCatsSystem => "Seibu CATS System",
            Self::TabAustriaQuizard => "TAB-Austria Quizard",
            Self::TsunamiTsuMoMultiGameMotionSystem => "Tsunami TsuMo Multi-Game Motion System",
            Self::AudioCd => "Audio CD",
            Self::BdVideo => "BD-Video",
            Self::DvdAudio => "DVD-Audio",
            Self::DvdVideo => "DVD-Video",
            Self::EnhancedCd => "Enhanced CD",
            Self::HdDvdVideo => "HD DVD-Video",
            Self::NavisoftNaviken21 => "Navisoft Naviken 2.1",
            Self::PalmOs => "Palm OS",
            Self::PhotoCd => "Photo CD",
            Self::PlayStationGameSharkUpdates => "PlayStation GameShark Updates",
            Self::PocketPc => "Pocket PC",
            Self::RainbowDisc => "Rainbow Disc",
            Self::SegaPrologue21MultimediaKaraokeSystem => "Sega Prologue 21 Multimedia Karaoke System",
            Self::SonyElectronicBook => "Sony Electronic Book",
            Self::SuperAudioCd => "Super Audio CD",
            Self::TaoIktv => "Tao iKTV",
            Self::TomyKissSite => "Tomy Kiss-Site",
            Self::VideoCd => "Video CD",
        })
    }

    /// Short code used in the database's URLs (e.g. `psx`, `ps2`).
    fn short_name(&self) -> Option<&'static str> {
        match self {
            Self::AtariJaguarCdInteractiveMultimediaSystem => Some("ajcd"),
            Self::BandaiPlaydiaQuickInteractiveSystem => Some("qis"),
            Self::BandaiPippin => Some("pippin"),
            Self::CommodoreAmigaCd32 => Some("cd32"),
            Self::CommodoreAmigaCdtv => Some("cdtv"),
            Self::EnvizionsEvoSmartConsole => Some("evo"),
            Self::FujitsuFmTownsMarty => Some("fmtm"),
            Self::HasbroVideoNow => Some("hvn"),
            Self::HasbroVideoNowColor => Some("hvnc"),
            Self::HasbroVideoNowJr => Some("hvnjr"),
            Self::HasbroVideoNowXp => Some("hvnxp"),
            Self::MattelFisherPriceIxl => Some("ixl"),
            Self::MattelHyperScan => Some("hs"),
            Self::MemorexVisualInformationSystem => Some("vis"),
            Self::MicrosoftXbox => Some("xbox"),
            Self::MicrosoftXbox360 => Some("xbox360"),
            Self::MicrosoftXboxOne => Some("xboxone"),
            Self::MicrosoftXboxSeriesXs => Some("xboxsx"),
            Self::NecPcEngineCdTurboGrafxCd => Some("pce"),
            Self::NecPcFxPcFxga => Some("pc-fx"),
            Self::NintendoGameCube => Some("gc"),
            Self::NintendoSonySuperNesCdRomSystem => Some("snescd"),
            Self::NintendoWii => Some("wii"),
            Self::NintendoWiiU => Some("wiiu"),
            Self::Panasonic3doInteractiveMultiplayer => Some("3do"),
            Self::PhilipsCdi => Some("cdi"),
            Self::PioneerLaserActive => Some("la"),
            Self::SegaDreamcast => Some("dc"),
            Self::SegaMegaCdSegaCd => Some("mcd"),
            Self::SegaSaturn => Some("ss"),
            Self::SnkNeoGeoCd => Some("ngcd"),
            Self::SonyPlayStation => Some("psx"),
            Self::SonyPlayStation2 => Some("ps2"),
            Self::SonyPlayStation3 => Some("ps3"),
            Self::SonyPlayStation4 => Some("ps4"),
            Self::SonyPlayStation5 => Some("ps5"),
            Self::SonyPlayStationPortable => Some("psp"),
            Self::VmLabsNuon => Some("nuon"),
            Self::VTechVFlashVSmilePro => Some("vflash"),
            Self::ZapitGamesGameWaveFamilyEntertainmentSystem => Some("gamewave"),
            Self::AcornArchimedes => Some("archcd"),
            Self::AppleMacintosh => Some("mac"),
            Self::CommodoreAmigaCd => Some("acd"),
            Self::FujitsuFmTownsSeries => Some("fmt"),
            Self::IbmPcCompatible => Some("pc"),
            Self::NecPc88Series => Some("pc-88"),
            Self::NecPc98Series => Some("pc-98"),
            Self::SharpX68000 => Some("x68k"),
            Self::AmericanLaserGames3do => Some("alg3do"),
            Self::Atari3do => Some("atari3do"),
            Self::Atronic => Some("atronic"),
            Self::AuscomSystem1 => Some("auscom"),
            Self::BallyGameMagic => Some("bally"),
            Self::CapcomCpSystemIii => Some("cps3"),
            Self::FunworldPhotoPlay => Some("fpp"),
            Self::GlobalVrVarious => Some("gvr"),
            Self::GlobalVrVortek => Some("gvrv"),
            Self::GlobalVrVortekV3 => Some("gvrv3"),
            Self::IcePcHardware => Some("ice"),
            Self::IncredibleTechnologiesEagle => Some("ite"),
            Self::IncredibleTechnologiesVarious => Some("itpc"),
            Self::KonamiEAmusement => Some("kea"),
            Self::KonamiFireBeat => Some("kfb"),
            Self::KonamiM2 => Some("km2"),
            Self::KonamiPython => Some("kpy"),
            Self::KonamiPython2 => Some("kpy2"),
            Self::KonamiSystem573 => Some("ks573"),
            Self::KonamiSystemGv => Some("ksgv"),
            Self::KonamiTwinkle => Some("kt"),
            Self::KonamiVarious => Some("kpc"),
            Self::MeritIndustriesBoardwalk => Some("mib"),
            Self::MeritIndustriesMegaTouchForce => Some("mif"),
            Self::MeritIndustriesMegaTouchIon => Some("mii"),
            Self::MeritIndustriesMegaTouchMaxx => Some("mim"),
            Self::MeritIndustriesMegaTouchXl => Some("mix"),
            Self::NamcoSegaNintendoTriforce => Some("triforce"),
            Self::NamcoSystem12 => Some("ns12"),
            Self::NamcoSystem246256 => Some("ns246"),
            Self::NewJatreCdi => Some("njcdi"),
            Self::NichibutsuHighRateSystem => Some("nhrs"),
            Self::NichibutsuSuperCd => Some("nscd"),
            Self::NichibutsuXRateSystem => Some("nxrs"),
            Self::PanasonicM2 => Some("m2"),
            Self::PhotoPlayVarious => Some("photoplay"),
            Self::RawThrillsVarious => Some("rawthrills"),
            Self::SegaAlls => Some("alls"),
            Self::SegaChihiro => Some("chihiro"),
            Self::SegaEuropaR => Some("europar"),
            Self::SegaLindbergh => Some("lindbergh"),
            Self::SegaNaomi => Some("naomi"),
            Self::SegaNaomi2 => Some("naomi2"),
            Self::SegaNu => Some("nu"),
            Self::SegaRingEdge => Some("sre"),
            Self::SegaRingEdge2 => Some("sre2"),
            Self::SegaRingWide => Some("srw"),
            Self::SegaSystem32 => Some("s32"),
            Self::SegaTitanVideo => Some("stv"),
            Self::SeibuCatsSystem => Some("cats"),
            Self::TabAustriaQuizard => Some("quizard"),
            Self::TsunamiTsuMoMultiGameMotionSystem => Some("tsumo"),
            Self::AudioCd => Some("audio-cd"),
            Self::BdVideo => Some("bd-video"),
            Self::DvdAudio => Some("dvd-audio"),
            Self::DvdVideo => Some("dvd-video"),
            Self::EnhancedCd => Some("enhanced-cd"),
            Self::HdDvdVideo => Some("hddvd-video"),
            Self::NavisoftNaviken21 => Some("navi21"),
            Self::PalmOs => Some("palm"),
            Self::PhotoCd => Some("photo-cd"),
            Self::PlayStationGameSharkUpdates => Some("psxgs"),
            Self::PocketPc => Some("ppc"),
            Self::SegaPrologue21MultimediaKaraokeSystem => Some("sp21"),
            Self::SonyElectronicBook => Some("seb"),
            Self::SuperAudioCd => Some("sacd"),
            Self::TaoIktv => Some("iktv"),
            Self::TomyKissSite => Some("ksite"),
            Self::VideoCd => Some("vcd"),
            Self::HasbroIonEducationalGamingSystem
            | Self::NintendoSwitch
            | Self::SonyPlayStationVita
            | Self::RainbowDisc => None,
        }
    }
}

human_readable_str!(RedumpSystem);

#[cfg(test)]
#[path = "tests/system_tests.rs"]
mod tests;
