//! Built-in Journey research table.
//!
//! Item ids follow the game's `ItemID` numbering and the keys are the
//! internal item names. `needed` is the number of copies that must be
//! sacrificed before the item can be duplicated.

use super::types::ResearchItem;

pub(crate) struct ResearchItemDef {
    pub id: i32,
    pub name: &'static str,
    pub needed: i32,
}

impl ResearchItemDef {
    pub fn to_item(&self) -> ResearchItem {
        ResearchItem {
            id: self.id,
            name: self.name.to_string(),
            needed: self.needed,
        }
    }
}

// Coins and other items that cannot be researched are left out.
#[rustfmt::skip]
pub(crate) const RESEARCH_ITEMS: &[ResearchItemDef] = &[
    ResearchItemDef { id:    1, name: "IronPickaxe",                   needed:   1 },
    ResearchItemDef { id:    2, name: "DirtBlock",                     needed: 100 },
    ResearchItemDef { id:    3, name: "StoneBlock",                    needed: 100 },
    ResearchItemDef { id:    4, name: "IronBroadsword",                needed:   1 },
    ResearchItemDef { id:    5, name: "Mushroom",                      needed:  25 },
    ResearchItemDef { id:    6, name: "IronShortsword",                needed:   1 },
    ResearchItemDef { id:    7, name: "IronHammer",                    needed:   1 },
    ResearchItemDef { id:    8, name: "Torch",                         needed: 100 },
    ResearchItemDef { id:    9, name: "Wood",                          needed: 100 },
    ResearchItemDef { id:   10, name: "IronAxe",                       needed:   1 },
    ResearchItemDef { id:   11, name: "IronOre",                       needed: 100 },
    ResearchItemDef { id:   12, name: "CopperOre",                     needed: 100 },
    ResearchItemDef { id:   13, name: "GoldOre",                       needed: 100 },
    ResearchItemDef { id:   14, name: "SilverOre",                     needed: 100 },
    ResearchItemDef { id:   15, name: "CopperWatch",                   needed:   1 },
    ResearchItemDef { id:   16, name: "SilverWatch",                   needed:   1 },
    ResearchItemDef { id:   17, name: "GoldWatch",                     needed:   1 },
    ResearchItemDef { id:   18, name: "DepthMeter",                    needed:   1 },
    ResearchItemDef { id:   19, name: "GoldBar",                       needed:  25 },
    ResearchItemDef { id:   20, name: "CopperBar",                     needed:  25 },
    ResearchItemDef { id:   21, name: "SilverBar",                     needed:  25 },
    ResearchItemDef { id:   22, name: "IronBar",                       needed:  25 },
    ResearchItemDef { id:   23, name: "Gel",                           needed: 100 },
    ResearchItemDef { id:   24, name: "WoodenSword",                   needed:   1 },
    ResearchItemDef { id:   25, name: "WoodenDoor",                    needed:   1 },
    ResearchItemDef { id:   26, name: "StoneWall",                     needed: 400 },
    ResearchItemDef { id:   27, name: "Acorn",                         needed: 100 },
    ResearchItemDef { id:   28, name: "LesserHealingPotion",           needed:  30 },
    ResearchItemDef { id:   29, name: "LifeCrystal",                   needed:  10 },
    ResearchItemDef { id:   30, name: "DirtWall",                      needed: 400 },
    ResearchItemDef { id:   31, name: "Bottle",                        needed: 100 },
    ResearchItemDef { id:   32, name: "WoodenTable",                   needed:   1 },
    ResearchItemDef { id:   33, name: "Furnace",                       needed:   1 },
    ResearchItemDef { id:   34, name: "WoodenChair",                   needed:   1 },
    ResearchItemDef { id:   35, name: "IronAnvil",                     needed:   1 },
    ResearchItemDef { id:   36, name: "WorkBench",                     needed:   1 },
    ResearchItemDef { id:   37, name: "Goggles",                       needed:   1 },
    ResearchItemDef { id:   38, name: "Lens",                          needed:   3 },
    ResearchItemDef { id:   39, name: "WoodenBow",                     needed:   1 },
    ResearchItemDef { id:   40, name: "WoodenArrow",                   needed:  99 },
    ResearchItemDef { id:   41, name: "FlamingArrow",                  needed:  99 },
    ResearchItemDef { id:   42, name: "Shuriken",                      needed:  99 },
    ResearchItemDef { id:   43, name: "SuspiciousLookingEye",          needed:   3 },
    ResearchItemDef { id:   44, name: "DemonBow",                      needed:   1 },
    ResearchItemDef { id:   45, name: "WarAxeoftheNight",              needed:   1 },
    ResearchItemDef { id:   46, name: "LightsBane",                    needed:   1 },
    ResearchItemDef { id:   47, name: "UnholyArrow",                   needed:  99 },
    ResearchItemDef { id:   48, name: "Chest",                         needed:   1 },
    ResearchItemDef { id:   49, name: "BandofRegeneration",            needed:   1 },
    ResearchItemDef { id:   50, name: "MagicMirror",                   needed:   1 },
    ResearchItemDef { id:   51, name: "JestersArrow",                  needed:  99 },
    ResearchItemDef { id:   52, name: "AngelStatue",                   needed:   1 },
    ResearchItemDef { id:   53, name: "CloudinaBottle",                needed:   1 },
    ResearchItemDef { id:   54, name: "HermesBoots",                   needed:   1 },
    ResearchItemDef { id:   55, name: "EnchantedBoomerang",            needed:   1 },
    ResearchItemDef { id:   56, name: "DemoniteOre",                   needed: 100 },
    ResearchItemDef { id:   57, name: "DemoniteBar",                   needed:  25 },
    ResearchItemDef { id:   59, name: "CorruptSeeds",                  needed:  25 },
    ResearchItemDef { id:   60, name: "VileMushroom",                  needed:  25 },
    ResearchItemDef { id:   61, name: "EbonstoneBlock",                needed: 100 },
    ResearchItemDef { id:   62, name: "GrassSeeds",                    needed:  25 },
    ResearchItemDef { id:   63, name: "Sunflower",                     needed:   1 },
    ResearchItemDef { id:   64, name: "Vilethorn",                     needed:   1 },
    ResearchItemDef { id:   65, name: "Starfury",                      needed:   1 },
    ResearchItemDef { id:   66, name: "PurificationPowder",            needed:  99 },
    ResearchItemDef { id:   67, name: "VilePowder",                    needed:  99 },
    ResearchItemDef { id:   68, name: "RottenChunk",                   needed:  25 },
    ResearchItemDef { id:   69, name: "WormTooth",                     needed:  25 },
    ResearchItemDef { id:   70, name: "WormFood",                      needed:   3 },
    ResearchItemDef { id:   75, name: "FallenStar",                    needed:  25 },
    ResearchItemDef { id:   76, name: "CopperGreaves",                 needed:   1 },
    ResearchItemDef { id:   77, name: "IronGreaves",                   needed:   1 },
    ResearchItemDef { id:   78, name: "SilverGreaves",                 needed:   1 },
    ResearchItemDef { id:   79, name: "GoldGreaves",                   needed:   1 },
    ResearchItemDef { id:   80, name: "CopperChainmail",               needed:   1 },
    ResearchItemDef { id:   81, name: "IronChainmail",                 needed:   1 },
    ResearchItemDef { id:   82, name: "SilverChainmail",               needed:   1 },
    ResearchItemDef { id:   83, name: "GoldChainmail",                 needed:   1 },
    ResearchItemDef { id:   84, name: "GrapplingHook",                 needed:   1 },
    ResearchItemDef { id:   85, name: "Chain",                         needed: 100 },
    ResearchItemDef { id:   86, name: "ShadowScale",                   needed:  25 },
    ResearchItemDef { id:   87, name: "PiggyBank",                     needed:   1 },
    ResearchItemDef { id:   88, name: "MiningHelmet",                  needed:   1 },
    ResearchItemDef { id:   89, name: "CopperHelmet",                  needed:   1 },
    ResearchItemDef { id:   90, name: "IronHelmet",                    needed:   1 },
    ResearchItemDef { id:   91, name: "SilverHelmet",                  needed:   1 },
    ResearchItemDef { id:   92, name: "GoldHelmet",                    needed:   1 },
    ResearchItemDef { id:   93, name: "WoodWall",                      needed: 400 },
    ResearchItemDef { id:   94, name: "WoodPlatform",                  needed: 200 },
    ResearchItemDef { id:   95, name: "FlintlockPistol",               needed:   1 },
    ResearchItemDef { id:   96, name: "Musket",                        needed:   1 },
    ResearchItemDef { id:   97, name: "MusketBall",                    needed:  99 },
    ResearchItemDef { id:   98, name: "Minishark",                     needed:   1 },
    ResearchItemDef { id:   99, name: "IronBow",                       needed:   1 },
    ResearchItemDef { id:  100, name: "ShadowGreaves",                 needed:   1 },
    ResearchItemDef { id:  101, name: "ShadowScalemail",               needed:   1 },
    ResearchItemDef { id:  102, name: "ShadowHelmet",                  needed:   1 },
    ResearchItemDef { id:  103, name: "NightmarePickaxe",              needed:   1 },
    ResearchItemDef { id:  104, name: "TheBreaker",                    needed:   1 },
    ResearchItemDef { id:  105, name: "Candle",                        needed:   1 },
    ResearchItemDef { id:  106, name: "CopperChandelier",              needed:   1 },
    ResearchItemDef { id:  107, name: "SilverChandelier",              needed:   1 },
    ResearchItemDef { id:  108, name: "GoldChandelier",                needed:   1 },
    ResearchItemDef { id:  109, name: "ManaCrystal",                   needed:  10 },
    ResearchItemDef { id:  110, name: "LesserManaPotion",              needed:  30 },
    ResearchItemDef { id:  111, name: "BandofStarpower",               needed:   1 },
    ResearchItemDef { id:  112, name: "FlowerofFire",                  needed:   1 },
    ResearchItemDef { id:  113, name: "MagicMissile",                  needed:   1 },
    ResearchItemDef { id:  114, name: "DirtRod",                       needed:   1 },
    ResearchItemDef { id:  115, name: "ShadowOrb",                     needed:   1 },
    ResearchItemDef { id:  116, name: "Meteorite",                     needed: 100 },
    ResearchItemDef { id:  117, name: "MeteoriteBar",                  needed:  25 },
    ResearchItemDef { id:  118, name: "Hook",                          needed:   5 },
    ResearchItemDef { id:  119, name: "Flamarang",                     needed:   1 },
    ResearchItemDef { id:  120, name: "MoltenFury",                    needed:   1 },
    ResearchItemDef { id:  121, name: "FieryGreatsword",               needed:   1 },
    ResearchItemDef { id:  122, name: "MoltenPickaxe",                 needed:   1 },
    ResearchItemDef { id:  123, name: "MeteorHelmet",                  needed:   1 },
    ResearchItemDef { id:  124, name: "MeteorSuit",                    needed:   1 },
    ResearchItemDef { id:  125, name: "MeteorLeggings",                needed:   1 },
    ResearchItemDef { id:  126, name: "BottledWater",                  needed:  30 },
    ResearchItemDef { id:  127, name: "SpaceGun",                      needed:   1 },
    ResearchItemDef { id:  128, name: "RocketBoots",                   needed:   1 },
    ResearchItemDef { id:  129, name: "GrayBrick",                     needed: 100 },
    ResearchItemDef { id:  130, name: "GrayBrickWall",                 needed: 400 },
    ResearchItemDef { id:  131, name: "RedBrick",                      needed: 100 },
    ResearchItemDef { id:  132, name: "RedBrickWall",                  needed: 400 },
    ResearchItemDef { id:  133, name: "ClayBlock",                     needed: 100 },
    ResearchItemDef { id:  134, name: "BlueBrick",                     needed: 100 },
    ResearchItemDef { id:  135, name: "BlueBrickWall",                 needed: 400 },
    ResearchItemDef { id:  136, name: "ChainLantern",                  needed:   1 },
    ResearchItemDef { id:  137, name: "GreenBrick",                    needed: 100 },
    ResearchItemDef { id:  138, name: "GreenBrickWall",                needed: 400 },
    ResearchItemDef { id:  139, name: "PinkBrick",                     needed: 100 },
    ResearchItemDef { id:  140, name: "PinkBrickWall",                 needed: 400 },
    ResearchItemDef { id:  141, name: "GoldBrick",                     needed: 100 },
    ResearchItemDef { id:  142, name: "GoldBrickWall",                 needed: 400 },
    ResearchItemDef { id:  143, name: "SilverBrick",                   needed: 100 },
    ResearchItemDef { id:  144, name: "SilverBrickWall",               needed: 400 },
    ResearchItemDef { id:  145, name: "CopperBrick",                   needed: 100 },
    ResearchItemDef { id:  146, name: "CopperBrickWall",               needed: 400 },
    ResearchItemDef { id:  147, name: "Spike",                         needed: 100 },
    ResearchItemDef { id:  148, name: "WaterCandle",                   needed:   1 },
    ResearchItemDef { id:  149, name: "Book",                          needed:  10 },
    ResearchItemDef { id:  150, name: "Cobweb",                        needed: 100 },
    ResearchItemDef { id:  151, name: "NecroHelmet",                   needed:   1 },
    ResearchItemDef { id:  152, name: "NecroBreastplate",              needed:   1 },
    ResearchItemDef { id:  153, name: "NecroGreaves",                  needed:   1 },
    ResearchItemDef { id:  154, name: "Bone",                          needed:  50 },
    ResearchItemDef { id:  155, name: "Muramasa",                      needed:   1 },
    ResearchItemDef { id:  156, name: "CobaltShield",                  needed:   1 },
    ResearchItemDef { id:  157, name: "AquaScepter",                   needed:   1 },
    ResearchItemDef { id:  158, name: "LuckyHorseshoe",                needed:   1 },
    ResearchItemDef { id:  159, name: "ShinyRedBalloon",               needed:   1 },
    ResearchItemDef { id:  160, name: "Harpoon",                       needed:   1 },
    ResearchItemDef { id:  161, name: "SpikyBall",                     needed:  99 },
    ResearchItemDef { id:  162, name: "BallOHurt",                     needed:   1 },
    ResearchItemDef { id:  163, name: "BlueMoon",                      needed:   1 },
    ResearchItemDef { id:  164, name: "Handgun",                       needed:   1 },
    ResearchItemDef { id:  165, name: "WaterBolt",                     needed:   1 },
    ResearchItemDef { id:  166, name: "Bomb",                          needed:  99 },
    ResearchItemDef { id:  167, name: "Dynamite",                      needed:  99 },
    ResearchItemDef { id:  168, name: "Grenade",                       needed:  99 },
    ResearchItemDef { id:  169, name: "SandBlock",                     needed: 100 },
    ResearchItemDef { id:  170, name: "Glass",                         needed: 100 },
    ResearchItemDef { id:  171, name: "Sign",                          needed:   1 },
    ResearchItemDef { id:  172, name: "AshBlock",                      needed: 100 },
    ResearchItemDef { id:  173, name: "Obsidian",                      needed: 100 },
    ResearchItemDef { id:  174, name: "Hellstone",                     needed: 100 },
    ResearchItemDef { id:  175, name: "HellstoneBar",                  needed:  25 },
    ResearchItemDef { id:  176, name: "MudBlock",                      needed: 100 },
    ResearchItemDef { id:  177, name: "Sapphire",                      needed:  15 },
    ResearchItemDef { id:  178, name: "Ruby",                          needed:  15 },
    ResearchItemDef { id:  179, name: "Emerald",                       needed:  15 },
    ResearchItemDef { id:  180, name: "Topaz",                         needed:  15 },
    ResearchItemDef { id:  181, name: "Amethyst",                      needed:  15 },
    ResearchItemDef { id:  182, name: "Diamond",                       needed:  15 },
    ResearchItemDef { id:  183, name: "GlowingMushroom",               needed:  25 },
    ResearchItemDef { id:  185, name: "IvyWhip",                       needed:   1 },
    ResearchItemDef { id:  186, name: "BreathingReed",                 needed:   1 },
    ResearchItemDef { id:  187, name: "Flipper",                       needed:   1 },
    ResearchItemDef { id:  188, name: "HealingPotion",                 needed:  30 },
    ResearchItemDef { id:  189, name: "ManaPotion",                    needed:  30 },
    ResearchItemDef { id:  190, name: "BladeofGrass",                  needed:   1 },
    ResearchItemDef { id:  191, name: "ThornChakram",                  needed:   1 },
    ResearchItemDef { id:  192, name: "ObsidianBrick",                 needed: 100 },
    ResearchItemDef { id:  193, name: "ObsidianSkull",                 needed:   1 },
    ResearchItemDef { id:  194, name: "MushroomGrassSeeds",            needed:  25 },
    ResearchItemDef { id:  195, name: "JungleGrassSeeds",              needed:  25 },
    ResearchItemDef { id:  196, name: "WoodenHammer",                  needed:   1 },
    ResearchItemDef { id:  197, name: "StarCannon",                    needed:   1 },
    ResearchItemDef { id:  198, name: "BluePhaseblade",                needed:   1 },
    ResearchItemDef { id:  199, name: "RedPhaseblade",                 needed:   1 },
    ResearchItemDef { id:  200, name: "GreenPhaseblade",               needed:   1 },
    ResearchItemDef { id:  201, name: "PurplePhaseblade",              needed:   1 },
    ResearchItemDef { id:  202, name: "WhitePhaseblade",               needed:   1 },
    ResearchItemDef { id:  203, name: "YellowPhaseblade",              needed:   1 },
    ResearchItemDef { id:  204, name: "MeteorHamaxe",                  needed:   1 },
    ResearchItemDef { id:  205, name: "EmptyBucket",                   needed:   1 },
    ResearchItemDef { id:  206, name: "WaterBucket",                   needed:   1 },
    ResearchItemDef { id:  207, name: "LavaBucket",                    needed:   1 },
    ResearchItemDef { id:  208, name: "JungleRose",                    needed:   1 },
    ResearchItemDef { id:  209, name: "Stinger",                       needed:  25 },
    ResearchItemDef { id:  210, name: "Vine",                          needed:  25 },
    ResearchItemDef { id:  211, name: "FeralClaws",                    needed:   1 },
    ResearchItemDef { id:  212, name: "AnkletoftheWind",               needed:   1 },
    ResearchItemDef { id:  213, name: "StaffofRegrowth",               needed:   1 },
    ResearchItemDef { id:  214, name: "HellstoneBrick",                needed: 100 },
    ResearchItemDef { id:  215, name: "WhoopieCushion",                needed:   1 },
    ResearchItemDef { id:  216, name: "Shackle",                       needed:   1 },
    ResearchItemDef { id:  217, name: "MoltenHamaxe",                  needed:   1 },
    ResearchItemDef { id:  218, name: "Flamelash",                     needed:   1 },
    ResearchItemDef { id:  219, name: "PhoenixBlaster",                needed:   1 },
    ResearchItemDef { id:  220, name: "Sunfury",                       needed:   1 },
    ResearchItemDef { id:  221, name: "Hellforge",                     needed:   1 },
    ResearchItemDef { id:  222, name: "ClayPot",                       needed:   1 },
    ResearchItemDef { id:  223, name: "NaturesGift",                   needed:   1 },
    ResearchItemDef { id:  224, name: "Bed",                           needed:   1 },
    ResearchItemDef { id:  225, name: "Silk",                          needed:  50 },
    ResearchItemDef { id:  226, name: "LesserRestorationPotion",       needed:  20 },
    ResearchItemDef { id:  227, name: "RestorationPotion",             needed:  20 },
    ResearchItemDef { id:  228, name: "JungleHat",                     needed:   1 },
    ResearchItemDef { id:  229, name: "JungleShirt",                   needed:   1 },
    ResearchItemDef { id:  230, name: "JunglePants",                   needed:   1 },
    ResearchItemDef { id:  231, name: "MoltenHelmet",                  needed:   1 },
    ResearchItemDef { id:  232, name: "MoltenBreastplate",             needed:   1 },
    ResearchItemDef { id:  233, name: "MoltenGreaves",                 needed:   1 },
    ResearchItemDef { id:  234, name: "MeteorShot",                    needed:  99 },
    ResearchItemDef { id:  235, name: "StickyBomb",                    needed:  99 },
    ResearchItemDef { id:  236, name: "BlackLens",                     needed:   3 },
    ResearchItemDef { id:  237, name: "Sunglasses",                    needed:   1 },
    ResearchItemDef { id:  238, name: "WizardHat",                     needed:   1 },
    ResearchItemDef { id:  239, name: "TopHat",                        needed:   1 },
    ResearchItemDef { id:  240, name: "TuxedoShirt",                   needed:   1 },
    ResearchItemDef { id:  241, name: "TuxedoPants",                   needed:   1 },
    ResearchItemDef { id:  242, name: "SummerHat",                     needed:   1 },
    ResearchItemDef { id:  243, name: "BunnyHood",                     needed:   1 },
    ResearchItemDef { id:  244, name: "PlumbersHat",                   needed:   1 },
    ResearchItemDef { id:  245, name: "PlumbersShirt",                 needed:   1 },
    ResearchItemDef { id:  246, name: "PlumbersPants",                 needed:   1 },
    ResearchItemDef { id:  247, name: "HerosHat",                      needed:   1 },
    ResearchItemDef { id:  248, name: "HerosShirt",                    needed:   1 },
    ResearchItemDef { id:  249, name: "HerosPants",                    needed:   1 },
    ResearchItemDef { id:  250, name: "FishBowl",                      needed:   1 },
    ResearchItemDef { id:  251, name: "ArchaeologistsHat",             needed:   1 },
    ResearchItemDef { id:  252, name: "ArchaeologistsJacket",          needed:   1 },
    ResearchItemDef { id:  253, name: "ArchaeologistsPants",           needed:   1 },
    ResearchItemDef { id:  254, name: "BlackThread",                   needed:   3 },
    ResearchItemDef { id:  255, name: "GreenThread",                   needed:   3 },
    ResearchItemDef { id:  256, name: "NinjaHood",                     needed:   1 },
    ResearchItemDef { id:  257, name: "NinjaShirt",                    needed:   1 },
    ResearchItemDef { id:  258, name: "NinjaPants",                    needed:   1 },
    ResearchItemDef { id:  259, name: "Leather",                       needed:  25 },
    ResearchItemDef { id:  260, name: "RedHat",                        needed:   1 },
    ResearchItemDef { id:  261, name: "Goldfish",                      needed:   5 },
    ResearchItemDef { id:  262, name: "Robe",                          needed:   1 },
    ResearchItemDef { id:  263, name: "RobotHat",                      needed:   1 },
    ResearchItemDef { id:  264, name: "GoldCrown",                     needed:   1 },
    ResearchItemDef { id:  265, name: "HellfireArrow",                 needed:  99 },
    ResearchItemDef { id:  266, name: "Sandgun",                       needed:   1 },
    ResearchItemDef { id:  267, name: "GuideVoodooDoll",               needed:   1 },
    ResearchItemDef { id:  268, name: "DivingHelmet",                  needed:   1 },
    ResearchItemDef { id:  269, name: "FamiliarShirt",                 needed:   1 },
    ResearchItemDef { id:  270, name: "FamiliarPants",                 needed:   1 },
    ResearchItemDef { id:  271, name: "FamiliarWig",                   needed:   1 },
    ResearchItemDef { id:  272, name: "DemonScythe",                   needed:   1 },
    ResearchItemDef { id:  273, name: "NightsEdge",                    needed:   1 },
    ResearchItemDef { id:  274, name: "DarkLance",                     needed:   1 },
    ResearchItemDef { id:  275, name: "Coral",                         needed:  25 },
    ResearchItemDef { id:  276, name: "Cactus",                        needed: 100 },
    ResearchItemDef { id:  277, name: "Trident",                       needed:   1 },
    ResearchItemDef { id:  278, name: "SilverBullet",                  needed:  99 },
    ResearchItemDef { id:  279, name: "ThrowingKnife",                 needed:  99 },
    ResearchItemDef { id:  280, name: "Spear",                         needed:   1 },
    ResearchItemDef { id:  281, name: "Blowpipe",                      needed:   1 },
    ResearchItemDef { id:  282, name: "Glowstick",                     needed:  99 },
    ResearchItemDef { id:  283, name: "Seed",                          needed:  99 },
    ResearchItemDef { id:  284, name: "WoodenBoomerang",               needed:   1 },
    ResearchItemDef { id:  285, name: "Aglet",                         needed:   1 },
    ResearchItemDef { id:  286, name: "StickyGlowstick",               needed:  99 },
    ResearchItemDef { id:  287, name: "PoisonedKnife",                 needed:  99 },
    ResearchItemDef { id:  288, name: "ObsidianSkinPotion",            needed:  20 },
    ResearchItemDef { id:  289, name: "RegenerationPotion",            needed:  20 },
    ResearchItemDef { id:  290, name: "SwiftnessPotion",               needed:  20 },
    ResearchItemDef { id:  291, name: "GillsPotion",                   needed:  20 },
    ResearchItemDef { id:  292, name: "IronskinPotion",                needed:  20 },
    ResearchItemDef { id:  293, name: "ManaRegenerationPotion",        needed:  20 },
    ResearchItemDef { id:  294, name: "MagicPowerPotion",              needed:  20 },
    ResearchItemDef { id:  295, name: "FeatherfallPotion",             needed:  20 },
    ResearchItemDef { id:  296, name: "SpelunkerPotion",               needed:  20 },
    ResearchItemDef { id:  297, name: "InvisibilityPotion",            needed:  20 },
    ResearchItemDef { id:  298, name: "ShinePotion",                   needed:  20 },
    ResearchItemDef { id:  299, name: "NightOwlPotion",                needed:  20 },
    ResearchItemDef { id:  300, name: "BattlePotion",                  needed:  20 },
    ResearchItemDef { id:  301, name: "ThornsPotion",                  needed:  20 },
    ResearchItemDef { id:  302, name: "WaterWalkingPotion",            needed:  20 },
    ResearchItemDef { id:  303, name: "ArcheryPotion",                 needed:  20 },
    ResearchItemDef { id:  304, name: "HunterPotion",                  needed:  20 },
    ResearchItemDef { id:  305, name: "GravitationPotion",             needed:  20 },
    ResearchItemDef { id:  306, name: "GoldChest",                     needed:   1 },
    ResearchItemDef { id:  307, name: "DaybloomSeeds",                 needed:  25 },
    ResearchItemDef { id:  308, name: "MoonglowSeeds",                 needed:  25 },
    ResearchItemDef { id:  309, name: "BlinkrootSeeds",                needed:  25 },
    ResearchItemDef { id:  310, name: "DeathweedSeeds",                needed:  25 },
    ResearchItemDef { id:  311, name: "WaterleafSeeds",                needed:  25 },
    ResearchItemDef { id:  312, name: "FireblossomSeeds",              needed:  25 },
    ResearchItemDef { id:  313, name: "Daybloom",                      needed:  25 },
    ResearchItemDef { id:  314, name: "Moonglow",                      needed:  25 },
    ResearchItemDef { id:  315, name: "Blinkroot",                     needed:  25 },
    ResearchItemDef { id:  316, name: "Deathweed",                     needed:  25 },
    ResearchItemDef { id:  317, name: "Waterleaf",                     needed:  25 },
    ResearchItemDef { id:  318, name: "Fireblossom",                   needed:  25 },
    ResearchItemDef { id:  319, name: "SharkFin",                      needed:  25 },
    ResearchItemDef { id:  320, name: "Feather",                       needed:  25 },
    ResearchItemDef { id:  321, name: "Tombstone",                     needed:   1 },
    ResearchItemDef { id:  322, name: "MimeMask",                      needed:   1 },
    ResearchItemDef { id:  323, name: "AntlionMandible",               needed:  25 },
    ResearchItemDef { id:  324, name: "IllegalGunParts",               needed:   1 },
    ResearchItemDef { id:  325, name: "TheDoctorsShirt",               needed:   1 },
    ResearchItemDef { id:  326, name: "TheDoctorsPants",               needed:   1 },
    ResearchItemDef { id:  327, name: "GoldenKey",                     needed:   1 },
    ResearchItemDef { id:  328, name: "ShadowChest",                   needed:   1 },
    ResearchItemDef { id:  329, name: "ShadowKey",                     needed:   1 },
    ResearchItemDef { id:  330, name: "ObsidianBrickWall",             needed: 400 },
    ResearchItemDef { id:  331, name: "JungleSpores",                  needed:  25 },
    ResearchItemDef { id:  332, name: "Loom",                          needed:   1 },
    ResearchItemDef { id:  333, name: "Piano",                         needed:   1 },
    ResearchItemDef { id:  334, name: "Dresser",                       needed:   1 },
    ResearchItemDef { id:  335, name: "Bench",                         needed:   1 },
    ResearchItemDef { id:  336, name: "Bathtub",                       needed:   1 },
    ResearchItemDef { id:  337, name: "RedBanner",                     needed:   1 },
    ResearchItemDef { id:  338, name: "GreenBanner",                   needed:   1 },
    ResearchItemDef { id:  339, name: "BlueBanner",                    needed:   1 },
    ResearchItemDef { id:  340, name: "YellowBanner",                  needed:   1 },
    ResearchItemDef { id:  341, name: "LampPost",                      needed:   1 },
    ResearchItemDef { id:  342, name: "TikiTorch",                     needed:   1 },
    ResearchItemDef { id:  343, name: "Barrel",                        needed:   1 },
    ResearchItemDef { id:  344, name: "ChineseLantern",                needed:   1 },
    ResearchItemDef { id:  345, name: "CookingPot",                    needed:   1 },
    ResearchItemDef { id:  346, name: "Safe",                          needed:   1 },
    ResearchItemDef { id:  347, name: "SkullLantern",                  needed:   1 },
    ResearchItemDef { id:  348, name: "TrashCan",                      needed:   1 },
    ResearchItemDef { id:  349, name: "Candelabra",                    needed:   1 },
    ResearchItemDef { id:  350, name: "PinkVase",                      needed:   1 },
    ResearchItemDef { id:  351, name: "Mug",                           needed:   1 },
    ResearchItemDef { id:  352, name: "Keg",                           needed:   1 },
    ResearchItemDef { id:  353, name: "Ale",                           needed:   5 },
    ResearchItemDef { id:  354, name: "Bookcase",                      needed:   1 },
    ResearchItemDef { id:  355, name: "Throne",                        needed:   1 },
    ResearchItemDef { id:  356, name: "Bowl",                          needed:   1 },
    ResearchItemDef { id:  357, name: "BowlofSoup",                    needed:   5 },
    ResearchItemDef { id:  358, name: "Toilet",                        needed:   1 },
    ResearchItemDef { id:  359, name: "GrandfatherClock",              needed:   1 },
    ResearchItemDef { id:  360, name: "ArmorStatue",                   needed:   1 },
    ResearchItemDef { id:  361, name: "GoblinBattleStandard",          needed:   3 },
    ResearchItemDef { id:  362, name: "TatteredCloth",                 needed:  25 },
    ResearchItemDef { id:  363, name: "Sawmill",                       needed:   1 },
    ResearchItemDef { id:  364, name: "CobaltOre",                     needed: 100 },
    ResearchItemDef { id:  365, name: "MythrilOre",                    needed: 100 },
    ResearchItemDef { id:  366, name: "AdamantiteOre",                 needed: 100 },
    ResearchItemDef { id:  367, name: "Pwnhammer",                     needed:   1 },
    ResearchItemDef { id:  368, name: "Excalibur",                     needed:   1 },
    ResearchItemDef { id:  369, name: "HallowedSeeds",                 needed:  25 },
    ResearchItemDef { id:  370, name: "EbonsandBlock",                 needed: 100 },
    ResearchItemDef { id:  371, name: "CobaltHat",                     needed:   1 },
    ResearchItemDef { id:  372, name: "CobaltHelmet",                  needed:   1 },
    ResearchItemDef { id:  373, name: "CobaltMask",                    needed:   1 },
    ResearchItemDef { id:  374, name: "CobaltBreastplate",             needed:   1 },
    ResearchItemDef { id:  375, name: "CobaltLeggings",                needed:   1 },
    ResearchItemDef { id:  376, name: "MythrilHood",                   needed:   1 },
    ResearchItemDef { id:  377, name: "MythrilHelmet",                 needed:   1 },
    ResearchItemDef { id:  378, name: "MythrilHat",                    needed:   1 },
    ResearchItemDef { id:  379, name: "MythrilChainmail",              needed:   1 },
    ResearchItemDef { id:  380, name: "MythrilGreaves",                needed:   1 },
    ResearchItemDef { id:  381, name: "CobaltBar",                     needed:  25 },
    ResearchItemDef { id:  382, name: "MythrilBar",                    needed:  25 },
    ResearchItemDef { id:  383, name: "CobaltChainsaw",                needed:   1 },
    ResearchItemDef { id:  384, name: "MythrilChainsaw",               needed:   1 },
    ResearchItemDef { id:  385, name: "CobaltDrill",                   needed:   1 },
    ResearchItemDef { id:  386, name: "MythrilDrill",                  needed:   1 },
    ResearchItemDef { id:  387, name: "AdamantiteChainsaw",            needed:   1 },
    ResearchItemDef { id:  388, name: "AdamantiteDrill",               needed:   1 },
    ResearchItemDef { id:  389, name: "DaoofPow",                      needed:   1 },
    ResearchItemDef { id:  390, name: "MythrilHalberd",                needed:   1 },
    ResearchItemDef { id:  391, name: "AdamantiteBar",                 needed:  25 },
    ResearchItemDef { id:  392, name: "GlassWall",                     needed: 400 },
    ResearchItemDef { id:  393, name: "Compass",                       needed:   1 },
    ResearchItemDef { id:  394, name: "DivingGear",                    needed:   1 },
    ResearchItemDef { id:  395, name: "GPS",                           needed:   1 },
    ResearchItemDef { id:  396, name: "ObsidianHorseshoe",             needed:   1 },
    ResearchItemDef { id:  397, name: "ObsidianShield",                needed:   1 },
    ResearchItemDef { id:  398, name: "TinkerersWorkshop",             needed:   1 },
    ResearchItemDef { id:  399, name: "CloudinaBalloon",               needed:   1 },
    ResearchItemDef { id:  400, name: "AdamantiteHeadgear",            needed:   1 },
    ResearchItemDef { id:  401, name: "AdamantiteHelmet",              needed:   1 },
    ResearchItemDef { id:  402, name: "AdamantiteMask",                needed:   1 },
    ResearchItemDef { id:  403, name: "AdamantiteBreastplate",         needed:   1 },
    ResearchItemDef { id:  404, name: "AdamantiteLeggings",            needed:   1 },
    ResearchItemDef { id:  405, name: "SpectreBoots",                  needed:   1 },
    ResearchItemDef { id:  406, name: "AdamantiteGlaive",              needed:   1 },
    ResearchItemDef { id:  407, name: "Toolbelt",                      needed:   1 },
    ResearchItemDef { id:  408, name: "PearlsandBlock",                needed: 100 },
    ResearchItemDef { id:  409, name: "PearlstoneBlock",               needed: 100 },
    ResearchItemDef { id:  410, name: "MiningShirt",                   needed:   1 },
    ResearchItemDef { id:  411, name: "MiningPants",                   needed:   1 },
    ResearchItemDef { id:  412, name: "PearlstoneBrick",               needed: 100 },
    ResearchItemDef { id:  413, name: "IridescentBrick",               needed: 100 },
    ResearchItemDef { id:  414, name: "MudstoneBlock",                 needed: 100 },
    ResearchItemDef { id:  415, name: "CobaltBrick",                   needed: 100 },
    ResearchItemDef { id:  416, name: "MythrilBrick",                  needed: 100 },
    ResearchItemDef { id:  417, name: "PearlstoneBrickWall",           needed: 400 },
    ResearchItemDef { id:  418, name: "IridescentBrickWall",           needed: 400 },
    ResearchItemDef { id:  419, name: "MudstoneBrickWall",             needed: 400 },
    ResearchItemDef { id:  420, name: "CobaltBrickWall",               needed: 400 },
    ResearchItemDef { id:  421, name: "MythrilBrickWall",              needed: 400 },
    ResearchItemDef { id:  422, name: "HolyWater",                     needed:  99 },
    ResearchItemDef { id:  423, name: "UnholyWater",                   needed:  99 },
    ResearchItemDef { id:  424, name: "SiltBlock",                     needed: 100 },
    ResearchItemDef { id:  425, name: "FairyBell",                     needed:   1 },
    ResearchItemDef { id:  426, name: "BreakerBlade",                  needed:   1 },
    ResearchItemDef { id:  427, name: "BlueTorch",                     needed: 100 },
    ResearchItemDef { id:  428, name: "RedTorch",                      needed: 100 },
    ResearchItemDef { id:  429, name: "GreenTorch",                    needed: 100 },
    ResearchItemDef { id:  430, name: "PurpleTorch",                   needed: 100 },
    ResearchItemDef { id:  431, name: "WhiteTorch",                    needed: 100 },
    ResearchItemDef { id:  432, name: "YellowTorch",                   needed: 100 },
    ResearchItemDef { id:  433, name: "DemonTorch",                    needed: 100 },
    ResearchItemDef { id:  434, name: "ClockworkAssaultRifle",         needed:   1 },
    ResearchItemDef { id:  435, name: "CobaltRepeater",                needed:   1 },
    ResearchItemDef { id:  436, name: "MythrilRepeater",               needed:   1 },
    ResearchItemDef { id:  437, name: "DualHook",                      needed:   1 },
    ResearchItemDef { id:  438, name: "StarStatue",                    needed:   1 },
    ResearchItemDef { id:  439, name: "SwordStatue",                   needed:   1 },
    ResearchItemDef { id:  440, name: "SlimeStatue",                   needed:   1 },
    ResearchItemDef { id:  441, name: "GoblinStatue",                  needed:   1 },
    ResearchItemDef { id:  442, name: "ShieldStatue",                  needed:   1 },
    ResearchItemDef { id:  443, name: "BatStatue",                     needed:   1 },
    ResearchItemDef { id:  444, name: "FishStatue",                    needed:   1 },
    ResearchItemDef { id:  445, name: "BunnyStatue",                   needed:   1 },
    ResearchItemDef { id:  446, name: "SkeletonStatue",                needed:   1 },
    ResearchItemDef { id:  447, name: "ReaperStatue",                  needed:   1 },
    ResearchItemDef { id:  448, name: "WomanStatue",                   needed:   1 },
    ResearchItemDef { id:  449, name: "ImpStatue",                     needed:   1 },
    ResearchItemDef { id:  450, name: "GargoyleStatue",                needed:   1 },
    ResearchItemDef { id:  451, name: "GloomStatue",                   needed:   1 },
    ResearchItemDef { id:  452, name: "HornetStatue",                  needed:   1 },
    ResearchItemDef { id:  453, name: "BombStatue",                    needed:   1 },
    ResearchItemDef { id:  454, name: "CrabStatue",                    needed:   1 },
    ResearchItemDef { id:  455, name: "HammerStatue",                  needed:   1 },
    ResearchItemDef { id:  456, name: "PotionStatue",                  needed:   1 },
    ResearchItemDef { id:  457, name: "SpearStatue",                   needed:   1 },
    ResearchItemDef { id:  458, name: "CrossStatue",                   needed:   1 },
    ResearchItemDef { id:  459, name: "JellyfishStatue",               needed:   1 },
    ResearchItemDef { id:  460, name: "BowStatue",                     needed:   1 },
    ResearchItemDef { id:  461, name: "BoomerangStatue",               needed:   1 },
    ResearchItemDef { id:  462, name: "BootStatue",                    needed:   1 },
    ResearchItemDef { id:  463, name: "ChestStatue",                   needed:   1 },
    ResearchItemDef { id:  464, name: "BirdStatue",                    needed:   1 },
    ResearchItemDef { id:  465, name: "AxeStatue",                     needed:   1 },
    ResearchItemDef { id:  466, name: "CorruptStatue",                 needed:   1 },
    ResearchItemDef { id:  467, name: "TreeStatue",                    needed:   1 },
    ResearchItemDef { id:  468, name: "AnvilStatue",                   needed:   1 },
    ResearchItemDef { id:  469, name: "PickaxeStatue",                 needed:   1 },
    ResearchItemDef { id:  470, name: "MushroomStatue",                needed:   1 },
    ResearchItemDef { id:  471, name: "EyeballStatue",                 needed:   1 },
    ResearchItemDef { id:  472, name: "PillarStatue",                  needed:   1 },
    ResearchItemDef { id:  473, name: "HeartStatue",                   needed:   1 },
    ResearchItemDef { id:  474, name: "PotStatue",                     needed:   1 },
    ResearchItemDef { id:  475, name: "SunflowerStatue",               needed:   1 },
    ResearchItemDef { id:  476, name: "KingStatue",                    needed:   1 },
    ResearchItemDef { id:  477, name: "QueenStatue",                   needed:   1 },
    ResearchItemDef { id:  478, name: "PiranhaStatue",                 needed:   1 },
    ResearchItemDef { id:  479, name: "PlankedWall",                   needed: 400 },
    ResearchItemDef { id:  480, name: "WoodenBeam",                    needed: 100 },
    ResearchItemDef { id:  481, name: "AdamantiteRepeater",            needed:   1 },
    ResearchItemDef { id:  482, name: "AdamantiteSword",               needed:   1 },
    ResearchItemDef { id:  483, name: "CobaltSword",                   needed:   1 },
    ResearchItemDef { id:  484, name: "MythrilSword",                  needed:   1 },
    ResearchItemDef { id:  485, name: "MoonCharm",                     needed:   1 },
    ResearchItemDef { id:  486, name: "Ruler",                         needed:   1 },
    ResearchItemDef { id:  487, name: "CrystalBall",                   needed:   1 },
    ResearchItemDef { id:  488, name: "DiscoBall",                     needed:   1 },
    ResearchItemDef { id:  489, name: "SorcererEmblem",                needed:   1 },
    ResearchItemDef { id:  490, name: "WarriorEmblem",                 needed:   1 },
    ResearchItemDef { id:  491, name: "RangerEmblem",                  needed:   1 },
    ResearchItemDef { id:  492, name: "DemonWings",                    needed:   1 },
    ResearchItemDef { id:  493, name: "AngelWings",                    needed:   1 },
    ResearchItemDef { id:  494, name: "MagicalHarp",                   needed:   1 },
    ResearchItemDef { id:  495, name: "RainbowRod",                    needed:   1 },
    ResearchItemDef { id:  496, name: "IceRod",                        needed:   1 },
    ResearchItemDef { id:  497, name: "NeptunesShell",                 needed:   1 },
    ResearchItemDef { id:  498, name: "Mannequin",                     needed:   1 },
    ResearchItemDef { id:  499, name: "GreaterHealingPotion",          needed:  30 },
    ResearchItemDef { id:  500, name: "GreaterManaPotion",             needed:  30 },
    ResearchItemDef { id:  501, name: "PixieDust",                     needed:  25 },
    ResearchItemDef { id:  502, name: "CrystalShard",                  needed:  25 },
    ResearchItemDef { id:  503, name: "ClownHat",                      needed:   1 },
    ResearchItemDef { id:  504, name: "ClownShirt",                    needed:   1 },
    ResearchItemDef { id:  505, name: "ClownPants",                    needed:   1 },
    ResearchItemDef { id:  506, name: "Flamethrower",                  needed:   1 },
    ResearchItemDef { id:  507, name: "Bell",                          needed:   1 },
    ResearchItemDef { id:  508, name: "Harp",                          needed:   1 },
    ResearchItemDef { id:  509, name: "Wrench",                        needed:   1 },
    ResearchItemDef { id:  510, name: "WireCutter",                    needed:   1 },
    ResearchItemDef { id:  511, name: "ActiveStoneBlock",              needed: 100 },
    ResearchItemDef { id:  512, name: "InactiveStoneBlock",            needed: 100 },
    ResearchItemDef { id:  513, name: "Lever",                         needed:   1 },
    ResearchItemDef { id:  514, name: "LaserRifle",                    needed:   1 },
    ResearchItemDef { id:  515, name: "CrystalBullet",                 needed:  99 },
    ResearchItemDef { id:  516, name: "HolyArrow",                     needed:  99 },
    ResearchItemDef { id:  517, name: "MagicDagger",                   needed:   1 },
    ResearchItemDef { id:  518, name: "CrystalStorm",                  needed:   1 },
    ResearchItemDef { id:  519, name: "CursedFlames",                  needed:   1 },
    ResearchItemDef { id:  520, name: "SoulofLight",                   needed:  25 },
    ResearchItemDef { id:  521, name: "SoulofNight",                   needed:  25 },
    ResearchItemDef { id:  522, name: "CursedFlame",                   needed:  25 },
    ResearchItemDef { id:  523, name: "CursedTorch",                   needed: 100 },
    ResearchItemDef { id:  524, name: "AdamantiteForge",               needed:   1 },
    ResearchItemDef { id:  525, name: "MythrilAnvil",                  needed:   1 },
    ResearchItemDef { id:  526, name: "UnicornHorn",                   needed:  25 },
    ResearchItemDef { id:  527, name: "DarkShard",                     needed:   3 },
    ResearchItemDef { id:  528, name: "LightShard",                    needed:   3 },
    ResearchItemDef { id:  529, name: "RedPressurePlate",              needed:   5 },
    ResearchItemDef { id:  530, name: "Wire",                          needed: 200 },
    ResearchItemDef { id:  531, name: "SpellTome",                     needed:   1 },
    ResearchItemDef { id:  532, name: "StarCloak",                     needed:   1 },
    ResearchItemDef { id:  533, name: "Megashark",                     needed:   1 },
    ResearchItemDef { id:  534, name: "Shotgun",                       needed:   1 },
    ResearchItemDef { id:  535, name: "PhilosophersStone",             needed:   1 },
    ResearchItemDef { id:  536, name: "TitanGlove",                    needed:   1 },
    ResearchItemDef { id:  537, name: "CobaltNaginata",                needed:   1 },
    ResearchItemDef { id:  538, name: "Switch",                        needed:   5 },
    ResearchItemDef { id:  539, name: "DartTrap",                      needed:   5 },
    ResearchItemDef { id:  540, name: "Boulder",                       needed:   5 },
    ResearchItemDef { id:  541, name: "GreenPressurePlate",            needed:   5 },
    ResearchItemDef { id:  542, name: "GrayPressurePlate",             needed:   5 },
    ResearchItemDef { id:  543, name: "BrownPressurePlate",            needed:   5 },
    ResearchItemDef { id:  544, name: "MechanicalEye",                 needed:   3 },
    ResearchItemDef { id:  545, name: "CursedArrow",                   needed:  99 },
    ResearchItemDef { id:  546, name: "CursedBullet",                  needed:  99 },
    ResearchItemDef { id:  547, name: "SoulofFright",                  needed:  25 },
    ResearchItemDef { id:  548, name: "SoulofMight",                   needed:  25 },
    ResearchItemDef { id:  549, name: "SoulofSight",                   needed:  25 },
    ResearchItemDef { id:  550, name: "Gungnir",                       needed:   1 },
    ResearchItemDef { id:  551, name: "HallowedPlateMail",             needed:   1 },
    ResearchItemDef { id:  552, name: "HallowedGreaves",               needed:   1 },
    ResearchItemDef { id:  553, name: "HallowedHelmet",                needed:   1 },
    ResearchItemDef { id:  554, name: "CrossNecklace",                 needed:   1 },
    ResearchItemDef { id:  555, name: "ManaFlower",                    needed:   1 },
    ResearchItemDef { id:  556, name: "MechanicalWorm",                needed:   3 },
    ResearchItemDef { id:  557, name: "MechanicalSkull",               needed:   3 },
    ResearchItemDef { id:  558, name: "HallowedHeadgear",              needed:   1 },
    ResearchItemDef { id:  559, name: "HallowedMask",                  needed:   1 },
    ResearchItemDef { id:  560, name: "SlimeCrown",                    needed:   3 },
    ResearchItemDef { id:  561, name: "LightDisc",                     needed:   1 },
    ResearchItemDef { id:  562, name: "MusicBoxOverworldDay",          needed:   1 },
    ResearchItemDef { id:  563, name: "MusicBoxEerie",                 needed:   1 },
    ResearchItemDef { id:  564, name: "MusicBoxNight",                 needed:   1 },
    ResearchItemDef { id:  565, name: "MusicBoxTitle",                 needed:   1 },
    ResearchItemDef { id:  566, name: "MusicBoxUnderground",           needed:   1 },
    ResearchItemDef { id:  567, name: "MusicBoxBoss1",                 needed:   1 },
    ResearchItemDef { id:  568, name: "MusicBoxJungle",                needed:   1 },
    ResearchItemDef { id:  569, name: "MusicBoxCorruption",            needed:   1 },
    ResearchItemDef { id:  570, name: "MusicBoxUndergroundCorruption", needed:   1 },
    ResearchItemDef { id:  571, name: "MusicBoxTheHallow",             needed:   1 },
    ResearchItemDef { id:  572, name: "MusicBoxBoss2",                 needed:   1 },
    ResearchItemDef { id:  573, name: "MusicBoxUndergroundHallow",     needed:   1 },
    ResearchItemDef { id:  574, name: "MusicBoxBoss3",                 needed:   1 },
    ResearchItemDef { id:  575, name: "SoulofFlight",                  needed:  25 },
    ResearchItemDef { id:  576, name: "MusicBox",                      needed:   1 },
    ResearchItemDef { id:  577, name: "DemoniteBrick",                 needed: 100 },
    ResearchItemDef { id:  578, name: "HallowedRepeater",              needed:   1 },
    ResearchItemDef { id:  579, name: "Drax",                          needed:   1 },
    ResearchItemDef { id:  580, name: "Explosives",                    needed:   5 },
    ResearchItemDef { id:  581, name: "InletPump",                     needed:   1 },
    ResearchItemDef { id:  582, name: "OutletPump",                    needed:   1 },
    ResearchItemDef { id:  583, name: "Timer1Second",                  needed:   5 },
    ResearchItemDef { id:  584, name: "Timer3Second",                  needed:   5 },
    ResearchItemDef { id:  585, name: "Timer5Second",                  needed:   5 },
    ResearchItemDef { id:  586, name: "CandyCaneBlock",                needed: 100 },
    ResearchItemDef { id:  587, name: "CandyCaneWall",                 needed: 400 },
    ResearchItemDef { id:  588, name: "SantaHat",                      needed:   1 },
    ResearchItemDef { id:  589, name: "SantaShirt",                    needed:   1 },
    ResearchItemDef { id:  590, name: "SantaPants",                    needed:   1 },
    ResearchItemDef { id:  591, name: "GreenCandyCaneBlock",           needed: 100 },
    ResearchItemDef { id:  592, name: "GreenCandyCaneWall",            needed: 400 },
    ResearchItemDef { id:  593, name: "SnowBlock",                     needed: 100 },
    ResearchItemDef { id:  594, name: "SnowBrick",                     needed: 100 },
    ResearchItemDef { id:  595, name: "SnowBrickWall",                 needed: 400 },
    ResearchItemDef { id:  596, name: "BlueLight",                     needed:   1 },
    ResearchItemDef { id:  597, name: "RedLight",                      needed:   1 },
    ResearchItemDef { id:  598, name: "GreenLight",                    needed:   1 },
    ResearchItemDef { id:  599, name: "BluePresent",                   needed:   1 },
    ResearchItemDef { id:  600, name: "GreenPresent",                  needed:   1 },
    ResearchItemDef { id:  601, name: "YellowPresent",                 needed:   1 },
    ResearchItemDef { id:  602, name: "SnowGlobe",                     needed:   3 },
    ResearchItemDef { id:  603, name: "Carrot",                        needed:   1 },
    ResearchItemDef { id:  604, name: "AdamantiteBeam",                needed: 100 },
    ResearchItemDef { id:  605, name: "AdamantiteBeamWall",            needed: 400 },
    ResearchItemDef { id:  606, name: "DemoniteBrickWall",             needed: 400 },
    ResearchItemDef { id:  607, name: "SandstoneBrick",                needed: 100 },
    ResearchItemDef { id:  608, name: "SandstoneBrickWall",            needed: 400 },
    ResearchItemDef { id:  609, name: "EbonstoneBrick",                needed: 100 },
    ResearchItemDef { id:  610, name: "EbonstoneBrickWall",            needed: 400 },
    ResearchItemDef { id:  611, name: "RedStucco",                     needed: 100 },
    ResearchItemDef { id:  612, name: "YellowStucco",                  needed: 100 },
    ResearchItemDef { id:  613, name: "GreenStucco",                   needed: 100 },
    ResearchItemDef { id:  614, name: "GrayStucco",                    needed: 100 },
    ResearchItemDef { id:  615, name: "RedStuccoWall",                 needed: 400 },
    ResearchItemDef { id:  616, name: "YellowStuccoWall",              needed: 400 },
    ResearchItemDef { id:  617, name: "GreenStuccoWall",               needed: 400 },
    ResearchItemDef { id:  618, name: "GrayStuccoWall",                needed: 400 },
    ResearchItemDef { id:  619, name: "Ebonwood",                      needed: 100 },
    ResearchItemDef { id:  620, name: "RichMahogany",                  needed: 100 },
    ResearchItemDef { id:  621, name: "Pearlwood",                     needed: 100 },
    ResearchItemDef { id:  622, name: "EbonwoodWall",                  needed: 400 },
    ResearchItemDef { id:  623, name: "RichMahoganyWall",              needed: 400 },
    ResearchItemDef { id:  624, name: "PearlwoodWall",                 needed: 400 },
    ResearchItemDef { id:  625, name: "EbonwoodChest",                 needed:   1 },
    ResearchItemDef { id:  626, name: "RichMahoganyChest",             needed:   1 },
    ResearchItemDef { id:  627, name: "PearlwoodChest",                needed:   1 },
    ResearchItemDef { id:  628, name: "EbonwoodChair",                 needed:   1 },
    ResearchItemDef { id:  629, name: "RichMahoganyChair",             needed:   1 },
    ResearchItemDef { id:  630, name: "PearlwoodChair",                needed:   1 },
    ResearchItemDef { id:  631, name: "EbonwoodPlatform",              needed: 200 },
    ResearchItemDef { id:  632, name: "RichMahoganyPlatform",          needed: 200 },
    ResearchItemDef { id:  633, name: "PearlwoodPlatform",             needed: 200 },
    ResearchItemDef { id:  634, name: "BonePlatform",                  needed: 200 },
    ResearchItemDef { id:  635, name: "EbonwoodWorkBench",             needed:   1 },
    ResearchItemDef { id:  636, name: "RichMahoganyWorkBench",         needed:   1 },
    ResearchItemDef { id:  637, name: "PearlwoodWorkBench",            needed:   1 },
    ResearchItemDef { id:  638, name: "EbonwoodTable",                 needed:   1 },
    ResearchItemDef { id:  639, name: "RichMahoganyTable",             needed:   1 },
    ResearchItemDef { id:  640, name: "PearlwoodTable",                needed:   1 },
    ResearchItemDef { id:  641, name: "EbonwoodPiano",                 needed:   1 },
    ResearchItemDef { id:  642, name: "RichMahoganyPiano",             needed:   1 },
    ResearchItemDef { id:  643, name: "PearlwoodPiano",                needed:   1 },
    ResearchItemDef { id:  644, name: "EbonwoodBed",                   needed:   1 },
    ResearchItemDef { id:  645, name: "RichMahoganyBed",               needed:   1 },
    ResearchItemDef { id:  646, name: "PearlwoodBed",                  needed:   1 },
    ResearchItemDef { id:  647, name: "EbonwoodDresser",               needed:   1 },
    ResearchItemDef { id:  648, name: "RichMahoganyDresser",           needed:   1 },
    ResearchItemDef { id:  649, name: "PearlwoodDresser",              needed:   1 },
    ResearchItemDef { id:  650, name: "EbonwoodDoor",                  needed:   1 },
    ResearchItemDef { id:  651, name: "RichMahoganyDoor",              needed:   1 },
    ResearchItemDef { id:  652, name: "PearlwoodDoor",                 needed:   1 },
    ResearchItemDef { id:  653, name: "EbonwoodSword",                 needed:   1 },
    ResearchItemDef { id:  654, name: "EbonwoodHammer",                needed:   1 },
    ResearchItemDef { id:  655, name: "EbonwoodBow",                   needed:   1 },
    ResearchItemDef { id:  656, name: "RichMahoganySword",             needed:   1 },
    ResearchItemDef { id:  657, name: "RichMahoganyHammer",            needed:   1 },
    ResearchItemDef { id:  658, name: "RichMahoganyBow",               needed:   1 },
    ResearchItemDef { id:  659, name: "PearlwoodSword",                needed:   1 },
    ResearchItemDef { id:  660, name: "PearlwoodHammer",               needed:   1 },
    ResearchItemDef { id:  661, name: "PearlwoodBow",                  needed:   1 },
    ResearchItemDef { id:  662, name: "RainbowBrick",                  needed: 100 },
    ResearchItemDef { id:  663, name: "RainbowBrickWall",              needed: 400 },
    ResearchItemDef { id:  664, name: "IceBlock",                      needed: 100 },
    ResearchItemDef { id:  665, name: "RedsWings",                     needed:   1 },
    ResearchItemDef { id:  666, name: "RedsHelmet",                    needed:   1 },
    ResearchItemDef { id:  667, name: "RedsBreastplate",               needed:   1 },
    ResearchItemDef { id:  668, name: "RedsLeggings",                  needed:   1 },
    ResearchItemDef { id:  669, name: "Fish",                          needed:   1 },
    ResearchItemDef { id:  670, name: "IceBoomerang",                  needed:   1 },
    ResearchItemDef { id:  671, name: "Keybrand",                      needed:   1 },
    ResearchItemDef { id:  672, name: "Cutlass",                       needed:   1 },
    ResearchItemDef { id:  674, name: "TrueExcalibur",                 needed:   1 },
    ResearchItemDef { id:  675, name: "TrueNightsEdge",                needed:   1 },
    ResearchItemDef { id:  676, name: "Frostbrand",                    needed:   1 },
    ResearchItemDef { id:  678, name: "RedPotion",                     needed:  20 },
    ResearchItemDef { id:  679, name: "TacticalShotgun",               needed:   1 },
    ResearchItemDef { id:  680, name: "IvyChest",                      needed:   1 },
    ResearchItemDef { id:  681, name: "IceChest",                      needed:   1 },
    ResearchItemDef { id:  682, name: "Marrow",                        needed:   1 },
    ResearchItemDef { id:  683, name: "UnholyTrident",                 needed:   1 },
    ResearchItemDef { id:  684, name: "FrostHelmet",                   needed:   1 },
    ResearchItemDef { id:  685, name: "FrostBreastplate",              needed:   1 },
    ResearchItemDef { id:  686, name: "FrostLeggings",                 needed:   1 },
    ResearchItemDef { id:  687, name: "TinHelmet",                     needed:   1 },
    ResearchItemDef { id:  688, name: "TinChainmail",                  needed:   1 },
    ResearchItemDef { id:  689, name: "TinGreaves",                    needed:   1 },
    ResearchItemDef { id:  690, name: "LeadHelmet",                    needed:   1 },
    ResearchItemDef { id:  691, name: "LeadChainmail",                 needed:   1 },
    ResearchItemDef { id:  692, name: "LeadGreaves",                   needed:   1 },
    ResearchItemDef { id:  693, name: "TungstenHelmet",                needed:   1 },
    ResearchItemDef { id:  694, name: "TungstenChainmail",             needed:   1 },
    ResearchItemDef { id:  695, name: "TungstenGreaves",               needed:   1 },
    ResearchItemDef { id:  696, name: "PlatinumHelmet",                needed:   1 },
    ResearchItemDef { id:  697, name: "PlatinumChainmail",             needed:   1 },
    ResearchItemDef { id:  698, name: "PlatinumGreaves",               needed:   1 },
    ResearchItemDef { id:  699, name: "TinOre",                        needed: 100 },
    ResearchItemDef { id:  700, name: "LeadOre",                       needed: 100 },
    ResearchItemDef { id:  701, name: "TungstenOre",                   needed: 100 },
    ResearchItemDef { id:  702, name: "PlatinumOre",                   needed: 100 },
    ResearchItemDef { id:  703, name: "TinBar",                        needed:  25 },
    ResearchItemDef { id:  704, name: "LeadBar",                       needed:  25 },
    ResearchItemDef { id:  705, name: "TungstenBar",                   needed:  25 },
    ResearchItemDef { id:  706, name: "PlatinumBar",                   needed:  25 },
    ResearchItemDef { id:  707, name: "TinWatch",                      needed:   1 },
    ResearchItemDef { id:  708, name: "TungstenWatch",                 needed:   1 },
    ResearchItemDef { id:  709, name: "PlatinumWatch",                 needed:   1 },
    ResearchItemDef { id:  710, name: "TinChandelier",                 needed:   1 },
    ResearchItemDef { id:  711, name: "TungstenChandelier",            needed:   1 },
    ResearchItemDef { id:  712, name: "PlatinumChandelier",            needed:   1 },
    ResearchItemDef { id:  713, name: "PlatinumCandle",                needed:   1 },
    ResearchItemDef { id:  714, name: "PlatinumCandelabra",            needed:   1 },
    ResearchItemDef { id:  715, name: "PlatinumCrown",                 needed:   1 },
    ResearchItemDef { id:  716, name: "LeadAnvil",                     needed:   1 },
    ResearchItemDef { id:  717, name: "TinBrick",                      needed: 100 },
    ResearchItemDef { id:  718, name: "TungstenBrick",                 needed: 100 },
    ResearchItemDef { id:  719, name: "PlatinumBrick",                 needed: 100 },
    ResearchItemDef { id:  720, name: "TinBrickWall",                  needed: 400 },
    ResearchItemDef { id:  721, name: "TungstenBrickWall",             needed: 400 },
    ResearchItemDef { id:  722, name: "PlatinumBrickWall",             needed: 400 },
    ResearchItemDef { id:  723, name: "BeamSword",                     needed:   1 },
    ResearchItemDef { id:  724, name: "IceBlade",                      needed:   1 },
    ResearchItemDef { id:  725, name: "IceBow",                        needed:   1 },
    ResearchItemDef { id:  726, name: "FrostStaff",                    needed:   1 },
    ResearchItemDef { id:  727, name: "WoodHelmet",                    needed:   1 },
    ResearchItemDef { id:  728, name: "WoodBreastplate",               needed:   1 },
    ResearchItemDef { id:  729, name: "WoodGreaves",                   needed:   1 },
    ResearchItemDef { id:  730, name: "EbonwoodHelmet",                needed:   1 },
    ResearchItemDef { id:  731, name: "EbonwoodBreastplate",           needed:   1 },
    ResearchItemDef { id:  732, name: "EbonwoodGreaves",               needed:   1 },
    ResearchItemDef { id:  733, name: "RichMahoganyHelmet",            needed:   1 },
    ResearchItemDef { id:  734, name: "RichMahoganyBreastplate",       needed:   1 },
    ResearchItemDef { id:  735, name: "RichMahoganyGreaves",           needed:   1 },
    ResearchItemDef { id:  736, name: "PearlwoodHelmet",               needed:   1 },
    ResearchItemDef { id:  737, name: "PearlwoodBreastplate",          needed:   1 },
    ResearchItemDef { id:  738, name: "PearlwoodGreaves",              needed:   1 },
    ResearchItemDef { id:  739, name: "AmethystStaff",                 needed:   1 },
    ResearchItemDef { id:  740, name: "TopazStaff",                    needed:   1 },
    ResearchItemDef { id:  741, name: "SapphireStaff",                 needed:   1 },
    ResearchItemDef { id:  742, name: "EmeraldStaff",                  needed:   1 },
    ResearchItemDef { id:  743, name: "RubyStaff",                     needed:   1 },
    ResearchItemDef { id:  744, name: "DiamondStaff",                  needed:   1 },
    ResearchItemDef { id:  745, name: "GrassWall",                     needed: 400 },
    ResearchItemDef { id:  746, name: "JungleWall",                    needed: 400 },
    ResearchItemDef { id:  747, name: "FlowerWall",                    needed: 400 },
    ResearchItemDef { id:  748, name: "Jetpack",                       needed:   1 },
    ResearchItemDef { id:  749, name: "ButterflyWings",                needed:   1 },
    ResearchItemDef { id:  750, name: "CactusWall",                    needed: 400 },
    ResearchItemDef { id:  751, name: "Cloud",                         needed: 100 },
    ResearchItemDef { id:  752, name: "CloudWall",                     needed: 400 },
    ResearchItemDef { id:  753, name: "Seaweed",                       needed:   1 },
    ResearchItemDef { id:  754, name: "RuneHat",                       needed:   1 },
    ResearchItemDef { id:  755, name: "RuneRobe",                      needed:   1 },
    ResearchItemDef { id:  756, name: "MushroomSpear",                 needed:   1 },
    ResearchItemDef { id:  757, name: "TerraBlade",                    needed:   1 },
    ResearchItemDef { id:  758, name: "GrenadeLauncher",               needed:   1 },
    ResearchItemDef { id:  759, name: "RocketLauncher",                needed:   1 },
    ResearchItemDef { id:  760, name: "ProximityMineLauncher",         needed:   1 },
    ResearchItemDef { id:  761, name: "FairyWings",                    needed:   1 },
    ResearchItemDef { id:  762, name: "SlimeBlock",                    needed: 100 },
    ResearchItemDef { id:  763, name: "FleshBlock",                    needed: 100 },
    ResearchItemDef { id:  764, name: "MushroomWall",                  needed: 400 },
    ResearchItemDef { id:  765, name: "RainCloud",                     needed: 100 },
    ResearchItemDef { id:  766, name: "BoneBlock",                     needed: 100 },
    ResearchItemDef { id:  767, name: "FrozenSlimeBlock",              needed: 100 },
    ResearchItemDef { id:  768, name: "BoneBlockWall",                 needed: 400 },
    ResearchItemDef { id:  769, name: "SlimeBlockWall",                needed: 400 },
    ResearchItemDef { id:  770, name: "FleshBlockWall",                needed: 400 },
    ResearchItemDef { id:  771, name: "RocketI",                       needed:  99 },
    ResearchItemDef { id:  772, name: "RocketII",                      needed:  99 },
    ResearchItemDef { id:  773, name: "RocketIII",                     needed:  99 },
    ResearchItemDef { id:  774, name: "RocketIV",                      needed:  99 },
    ResearchItemDef { id:  775, name: "AsphaltBlock",                  needed: 100 },
    ResearchItemDef { id:  776, name: "CobaltPickaxe",                 needed:   1 },
    ResearchItemDef { id:  777, name: "MythrilPickaxe",                needed:   1 },
    ResearchItemDef { id:  778, name: "AdamantitePickaxe",             needed:   1 },
    ResearchItemDef { id:  779, name: "Clentaminator",                 needed:   1 },
    ResearchItemDef { id:  780, name: "GreenSolution",                 needed:  99 },
    ResearchItemDef { id:  781, name: "BlueSolution",                  needed:  99 },
    ResearchItemDef { id:  782, name: "PurpleSolution",                needed:  99 },
    ResearchItemDef { id:  783, name: "DarkBlueSolution",              needed:  99 },
    ResearchItemDef { id:  784, name: "RedSolution",                   needed:  99 },
    ResearchItemDef { id:  785, name: "HarpyWings",                    needed:   1 },
    ResearchItemDef { id:  786, name: "BoneWings",                     needed:   1 },
    ResearchItemDef { id:  787, name: "Hammush",                       needed:   1 },
    ResearchItemDef { id:  788, name: "NettleBurst",                   needed:   1 },
    ResearchItemDef { id:  789, name: "AnkhBanner",                    needed:   1 },
    ResearchItemDef { id:  790, name: "SnakeBanner",                   needed:   1 },
    ResearchItemDef { id:  791, name: "OmegaBanner",                   needed:   1 },
    ResearchItemDef { id:  792, name: "CrimsonHelmet",                 needed:   1 },
    ResearchItemDef { id:  793, name: "CrimsonScalemail",              needed:   1 },
    ResearchItemDef { id:  794, name: "CrimsonGreaves",                needed:   1 },
    ResearchItemDef { id:  795, name: "BloodButcherer",                needed:   1 },
    ResearchItemDef { id:  796, name: "TendonBow",                     needed:   1 },
    ResearchItemDef { id:  797, name: "FleshGrinder",                  needed:   1 },
    ResearchItemDef { id:  798, name: "DeathbringerPickaxe",           needed:   1 },
    ResearchItemDef { id:  799, name: "BloodLustCluster",              needed:   1 },
    ResearchItemDef { id:  800, name: "TheUndertaker",                 needed:   1 },
    ResearchItemDef { id:  801, name: "TheMeatball",                   needed:   1 },
    ResearchItemDef { id:  802, name: "TheRottedFork",                 needed:   1 },
    ResearchItemDef { id:  803, name: "EskimoHood",                    needed:   1 },
    ResearchItemDef { id:  804, name: "EskimoCoat",                    needed:   1 },
    ResearchItemDef { id:  805, name: "EskimoPants",                   needed:   1 },
    ResearchItemDef { id:  806, name: "LivingWoodChair",               needed:   1 },
    ResearchItemDef { id:  807, name: "CactusChair",                   needed:   1 },
    ResearchItemDef { id:  808, name: "BoneChair",                     needed:   1 },
    ResearchItemDef { id:  809, name: "FleshChair",                    needed:   1 },
    ResearchItemDef { id:  810, name: "MushroomChair",                 needed:   1 },
    ResearchItemDef { id:  811, name: "BoneWorkBench",                 needed:   1 },
    ResearchItemDef { id:  812, name: "CactusWorkBench",               needed:   1 },
    ResearchItemDef { id:  813, name: "FleshWorkBench",                needed:   1 },
    ResearchItemDef { id:  814, name: "MushroomWorkBench",             needed:   1 },
    ResearchItemDef { id:  815, name: "SlimeWorkBench",                needed:   1 },
    ResearchItemDef { id:  816, name: "CactusDoor",                    needed:   1 },
    ResearchItemDef { id:  817, name: "FleshDoor",                     needed:   1 },
    ResearchItemDef { id:  818, name: "MushroomDoor",                  needed:   1 },
    ResearchItemDef { id:  819, name: "LivingWoodDoor",                needed:   1 },
    ResearchItemDef { id:  820, name: "BoneDoor",                      needed:   1 },
    ResearchItemDef { id:  821, name: "FleshWings",                    needed:   1 },
    ResearchItemDef { id:  822, name: "FrozenWings",                   needed:   1 },
    ResearchItemDef { id:  823, name: "SpectreWings",                  needed:   1 },
    ResearchItemDef { id:  824, name: "SunplateBlock",                 needed: 100 },
    ResearchItemDef { id:  825, name: "DiscWall",                      needed: 400 },
    ResearchItemDef { id:  826, name: "SkywareChair",                  needed:   1 },
    ResearchItemDef { id:  827, name: "BoneTable",                     needed:   1 },
    ResearchItemDef { id:  828, name: "FleshTable",                    needed:   1 },
    ResearchItemDef { id:  829, name: "LivingWoodTable",               needed:   1 },
    ResearchItemDef { id:  830, name: "SkywareTable",                  needed:   1 },
    ResearchItemDef { id:  831, name: "LivingWoodChest",               needed:   1 },
    ResearchItemDef { id:  832, name: "LivingWoodWand",                needed:   1 },
    ResearchItemDef { id:  833, name: "PurpleIceBlock",                needed: 100 },
    ResearchItemDef { id:  834, name: "PinkIceBlock",                  needed: 100 },
    ResearchItemDef { id:  835, name: "RedIceBlock",                   needed: 100 },
    ResearchItemDef { id:  836, name: "CrimstoneBlock",                needed: 100 },
    ResearchItemDef { id:  837, name: "SkywareDoor",                   needed:   1 },
    ResearchItemDef { id:  838, name: "SkywareChest",                  needed:   1 },
    ResearchItemDef { id:  839, name: "SteampunkHat",                  needed:   1 },
    ResearchItemDef { id:  840, name: "SteampunkShirt",                needed:   1 },
    ResearchItemDef { id:  841, name: "SteampunkPants",                needed:   1 },
    ResearchItemDef { id:  842, name: "BeeHat",                        needed:   1 },
    ResearchItemDef { id:  843, name: "BeeShirt",                      needed:   1 },
    ResearchItemDef { id:  844, name: "BeePants",                      needed:   1 },
    ResearchItemDef { id:  845, name: "WorldBanner",                   needed:   1 },
    ResearchItemDef { id:  846, name: "SunBanner",                     needed:   1 },
    ResearchItemDef { id:  847, name: "GravityBanner",                 needed:   1 },
    ResearchItemDef { id:  848, name: "PharaohsMask",                  needed:   1 },
    ResearchItemDef { id:  849, name: "Actuator",                      needed: 100 },
    ResearchItemDef { id:  850, name: "BlueWrench",                    needed:   1 },
    ResearchItemDef { id:  851, name: "GreenWrench",                   needed:   1 },
    ResearchItemDef { id:  852, name: "BluePressurePlate",             needed:   5 },
    ResearchItemDef { id:  853, name: "YellowPressurePlate",           needed:   5 },
    ResearchItemDef { id:  854, name: "DiscountCard",                  needed:   1 },
    ResearchItemDef { id:  855, name: "LuckyCoin",                     needed:   1 },
    ResearchItemDef { id:  856, name: "UnicornonaStick",               needed:   1 },
    ResearchItemDef { id:  857, name: "SandstorminaBottle",            needed:   1 },
    ResearchItemDef { id:  859, name: "BeachBall",                     needed:   1 },
    ResearchItemDef { id:  860, name: "CharmofMyths",                  needed:   1 },
    ResearchItemDef { id:  861, name: "MoonShell",                     needed:   1 },
    ResearchItemDef { id:  862, name: "StarVeil",                      needed:   1 },
    ResearchItemDef { id:  863, name: "WaterWalkingBoots",             needed:   1 },
    ResearchItemDef { id:  864, name: "Tiara",                         needed:   1 },
    ResearchItemDef { id:  865, name: "PrincessDress",                 needed:   1 },
    ResearchItemDef { id:  866, name: "PharaohsRobe",                  needed:   1 },
    ResearchItemDef { id:  867, name: "GreenCap",                      needed:   1 },
    ResearchItemDef { id:  868, name: "MushroomCap",                   needed:   1 },
    ResearchItemDef { id:  869, name: "TamOShanter",                   needed:   1 },
    ResearchItemDef { id:  870, name: "MummyMask",                     needed:   1 },
    ResearchItemDef { id:  871, name: "MummyShirt",                    needed:   1 },
    ResearchItemDef { id:  872, name: "MummyPants",                    needed:   1 },
    ResearchItemDef { id:  873, name: "CowboyHat",                     needed:   1 },
    ResearchItemDef { id:  874, name: "CowboyJacket",                  needed:   1 },
    ResearchItemDef { id:  875, name: "CowboyPants",                   needed:   1 },
    ResearchItemDef { id:  876, name: "PirateHat",                     needed:   1 },
    ResearchItemDef { id:  877, name: "PirateShirt",                   needed:   1 },
    ResearchItemDef { id:  878, name: "PiratePants",                   needed:   1 },
    ResearchItemDef { id:  879, name: "VikingHelmet",                  needed:   1 },
    ResearchItemDef { id:  880, name: "CrimtaneOre",                   needed: 100 },
    ResearchItemDef { id:  881, name: "CactusSword",                   needed:   1 },
    ResearchItemDef { id:  882, name: "CactusPickaxe",                 needed:   1 },
    ResearchItemDef { id:  883, name: "IceBrick",                      needed: 100 },
    ResearchItemDef { id:  884, name: "IceBrickWall",                  needed: 400 },
    ResearchItemDef { id:  885, name: "AdhesiveBandage",               needed:   1 },
    ResearchItemDef { id:  886, name: "ArmorPolish",                   needed:   1 },
    ResearchItemDef { id:  887, name: "Bezoar",                        needed:   1 },
    ResearchItemDef { id:  888, name: "Blindfold",                     needed:   1 },
    ResearchItemDef { id:  889, name: "FastClock",                     needed:   1 },
    ResearchItemDef { id:  890, name: "Megaphone",                     needed:   1 },
    ResearchItemDef { id:  891, name: "Nazar",                         needed:   1 },
    ResearchItemDef { id:  892, name: "Vitamins",                      needed:   1 },
    ResearchItemDef { id:  893, name: "TrifoldMap",                    needed:   1 },
    ResearchItemDef { id:  894, name: "CactusHelmet",                  needed:   1 },
    ResearchItemDef { id:  895, name: "CactusBreastplate",             needed:   1 },
    ResearchItemDef { id:  896, name: "CactusLeggings",                needed:   1 },
    ResearchItemDef { id:  897, name: "PowerGlove",                    needed:   1 },
    ResearchItemDef { id:  898, name: "LightningBoots",                needed:   1 },
    ResearchItemDef { id:  899, name: "SunStone",                      needed:   1 },
    ResearchItemDef { id:  900, name: "MoonStone",                     needed:   1 },
    ResearchItemDef { id:  901, name: "ArmorBracing",                  needed:   1 },
    ResearchItemDef { id:  902, name: "MedicatedBandage",              needed:   1 },
    ResearchItemDef { id:  903, name: "ThePlan",                       needed:   1 },
    ResearchItemDef { id:  904, name: "CountercurseMantra",            needed:   1 },
    ResearchItemDef { id:  905, name: "CoinGun",                       needed:   1 },
    ResearchItemDef { id:  906, name: "LavaCharm",                     needed:   1 },
    ResearchItemDef { id:  907, name: "ObsidianWaterWalkingBoots",     needed:   1 },
    ResearchItemDef { id:  908, name: "LavaWaders",                    needed:   1 },
    ResearchItemDef { id:  909, name: "PureWaterFountain",             needed:   1 },
    ResearchItemDef { id:  910, name: "DesertWaterFountain",           needed:   1 },
    ResearchItemDef { id:  911, name: "Shadewood",                     needed: 100 },
    ResearchItemDef { id:  912, name: "ShadewoodDoor",                 needed:   1 },
    ResearchItemDef { id:  913, name: "ShadewoodPlatform",             needed: 200 },
    ResearchItemDef { id:  914, name: "ShadewoodChest",                needed:   1 },
    ResearchItemDef { id:  915, name: "ShadewoodChair",                needed:   1 },
    ResearchItemDef { id:  916, name: "ShadewoodWorkBench",            needed:   1 },
    ResearchItemDef { id:  917, name: "ShadewoodTable",                needed:   1 },
    ResearchItemDef { id:  918, name: "ShadewoodDresser",              needed:   1 },
    ResearchItemDef { id:  919, name: "ShadewoodPiano",                needed:   1 },
    ResearchItemDef { id:  920, name: "ShadewoodBed",                  needed:   1 },
    ResearchItemDef { id:  921, name: "ShadewoodSword",                needed:   1 },
    ResearchItemDef { id:  922, name: "ShadewoodHammer",               needed:   1 },
    ResearchItemDef { id:  923, name: "ShadewoodBow",                  needed:   1 },
    ResearchItemDef { id:  924, name: "ShadewoodHelmet",               needed:   1 },
    ResearchItemDef { id:  925, name: "ShadewoodBreastplate",          needed:   1 },
    ResearchItemDef { id:  926, name: "ShadewoodGreaves",              needed:   1 },
    ResearchItemDef { id:  927, name: "ShadewoodWall",                 needed: 400 },
    ResearchItemDef { id:  928, name: "Cannon",                        needed:   1 },
    ResearchItemDef { id:  929, name: "Cannonball",                    needed:  99 },
    ResearchItemDef { id:  930, name: "FlareGun",                      needed:   1 },
    ResearchItemDef { id:  931, name: "Flare",                         needed:  99 },
    ResearchItemDef { id:  932, name: "BoneWand",                      needed:   1 },
    ResearchItemDef { id:  933, name: "LeafWand",                      needed:   1 },
    ResearchItemDef { id:  934, name: "FlyingCarpet",                  needed:   1 },
    ResearchItemDef { id:  935, name: "AvengerEmblem",                 needed:   1 },
    ResearchItemDef { id:  936, name: "MechanicalGlove",               needed:   1 },
    ResearchItemDef { id:  937, name: "LandMine",                      needed:   5 },
    ResearchItemDef { id:  938, name: "PaladinsShield",                needed:   1 },
    ResearchItemDef { id:  939, name: "WebSlinger",                    needed:   1 },
    ResearchItemDef { id:  940, name: "JungleWaterFountain",           needed:   1 },
    ResearchItemDef { id:  941, name: "IcyWaterFountain",              needed:   1 },
    ResearchItemDef { id:  942, name: "CorruptWaterFountain",          needed:   1 },
    ResearchItemDef { id:  943, name: "CrimsonWaterFountain",          needed:   1 },
    ResearchItemDef { id:  944, name: "HallowedWaterFountain",         needed:   1 },
    ResearchItemDef { id:  945, name: "BloodWaterFountain",            needed:   1 },
    ResearchItemDef { id:  946, name: "Umbrella",                      needed:   1 },
    ResearchItemDef { id:  947, name: "ChlorophyteOre",                needed: 100 },
    ResearchItemDef { id:  948, name: "SteampunkWings",                needed:   1 },
    ResearchItemDef { id:  949, name: "Snowball",                      needed:  99 },
    ResearchItemDef { id:  950, name: "IceSkates",                     needed:   1 },
    ResearchItemDef { id:  951, name: "SnowballLauncher",              needed:   1 },
    ResearchItemDef { id:  952, name: "WebCoveredChest",               needed:   1 },
    ResearchItemDef { id:  953, name: "ClimbingClaws",                 needed:   1 },
    ResearchItemDef { id:  954, name: "AncientIronHelmet",             needed:   1 },
    ResearchItemDef { id:  955, name: "AncientGoldHelmet",             needed:   1 },
    ResearchItemDef { id:  956, name: "AncientShadowHelmet",           needed:   1 },
    ResearchItemDef { id:  957, name: "AncientShadowScalemail",        needed:   1 },
    ResearchItemDef { id:  958, name: "AncientShadowGreaves",          needed:   1 },
    ResearchItemDef { id:  959, name: "AncientNecroHelmet",            needed:   1 },
    ResearchItemDef { id:  960, name: "AncientCobaltHelmet",           needed:   1 },
    ResearchItemDef { id:  961, name: "AncientCobaltBreastplate",      needed:   1 },
    ResearchItemDef { id:  962, name: "AncientCobaltLeggings",         needed:   1 },
    ResearchItemDef { id:  963, name: "BlackBelt",                     needed:   1 },
    ResearchItemDef { id:  964, name: "Boomstick",                     needed:   1 },
    ResearchItemDef { id:  965, name: "Rope",                          needed: 100 },
    ResearchItemDef { id:  966, name: "Campfire",                      needed:   1 },
    ResearchItemDef { id:  967, name: "Marshmallow",                   needed:   5 },
    ResearchItemDef { id:  968, name: "MarshmallowonaStick",           needed:   1 },
    ResearchItemDef { id:  969, name: "CookedMarshmallow",             needed:   5 },
    ResearchItemDef { id:  970, name: "RedRocket",                     needed:  99 },
    ResearchItemDef { id:  971, name: "GreenRocket",                   needed:  99 },
    ResearchItemDef { id:  972, name: "BlueRocket",                    needed:  99 },
    ResearchItemDef { id:  973, name: "YellowRocket",                  needed:  99 },
    ResearchItemDef { id:  974, name: "IceTorch",                      needed: 100 },
    ResearchItemDef { id:  975, name: "ShoeSpikes",                    needed:   1 },
    ResearchItemDef { id:  976, name: "TigerClimbingGear",             needed:   1 },
    ResearchItemDef { id:  977, name: "Tabi",                          needed:   1 },
    ResearchItemDef { id:  978, name: "PinkEskimoHood",                needed:   1 },
    ResearchItemDef { id:  979, name: "PinkEskimoCoat",                needed:   1 },
    ResearchItemDef { id:  980, name: "PinkEskimoPants",               needed:   1 },
    ResearchItemDef { id:  981, name: "PinkThread",                    needed:   3 },
    ResearchItemDef { id:  982, name: "ManaRegenerationBand",          needed:   1 },
    ResearchItemDef { id:  983, name: "SandstorminaBalloon",           needed:   1 },
    ResearchItemDef { id:  984, name: "MasterNinjaGear",               needed:   1 },
    ResearchItemDef { id:  985, name: "RopeCoil",                      needed:  25 },
    ResearchItemDef { id:  986, name: "Blowgun",                       needed:   1 },
    ResearchItemDef { id:  987, name: "BlizzardinaBottle",             needed:   1 },
    ResearchItemDef { id:  988, name: "FrostburnArrow",                needed:  99 },
    ResearchItemDef { id:  989, name: "EnchantedSword",                needed:   1 },
    ResearchItemDef { id:  990, name: "PickaxeAxe",                    needed:   1 },
    ResearchItemDef { id:  991, name: "CobaltWaraxe",                  needed:   1 },
    ResearchItemDef { id:  992, name: "MythrilWaraxe",                 needed:   1 },
    ResearchItemDef { id:  993, name: "AdamantiteWaraxe",              needed:   1 },
    ResearchItemDef { id:  994, name: "EatersBone",                    needed:   1 },
    ResearchItemDef { id:  995, name: "BlendOMatic",                   needed:   1 },
    ResearchItemDef { id:  996, name: "MeatGrinder",                   needed:   1 },
    ResearchItemDef { id:  997, name: "Extractinator",                 needed:   1 },
    ResearchItemDef { id:  998, name: "Solidifier",                    needed:   1 },
    ResearchItemDef { id:  999, name: "Amber",                         needed:  15 },
    ResearchItemDef { id: 1000, name: "ConfettiGun",                   needed:  99 },
    ResearchItemDef { id: 1001, name: "ChlorophyteMask",               needed:   1 },
    ResearchItemDef { id: 1002, name: "ChlorophyteHelmet",             needed:   1 },
    ResearchItemDef { id: 1003, name: "ChlorophyteHeadgear",           needed:   1 },
    ResearchItemDef { id: 1004, name: "ChlorophytePlateMail",          needed:   1 },
    ResearchItemDef { id: 1005, name: "ChlorophyteGreaves",            needed:   1 },
    ResearchItemDef { id: 1006, name: "ChlorophyteBar",                needed:  25 },
    ResearchItemDef { id: 1007, name: "RedDye",                        needed:   3 },
    ResearchItemDef { id: 1008, name: "OrangeDye",                     needed:   3 },
    ResearchItemDef { id: 1009, name: "YellowDye",                     needed:   3 },
    ResearchItemDef { id: 1010, name: "LimeDye",                       needed:   3 },
    ResearchItemDef { id: 1011, name: "GreenDye",                      needed:   3 },
    ResearchItemDef { id: 1012, name: "TealDye",                       needed:   3 },
    ResearchItemDef { id: 1013, name: "CyanDye",                       needed:   3 },
    ResearchItemDef { id: 1014, name: "SkyBlueDye",                    needed:   3 },
    ResearchItemDef { id: 1015, name: "BlueDye",                       needed:   3 },
    ResearchItemDef { id: 1016, name: "PurpleDye",                     needed:   3 },
    ResearchItemDef { id: 1017, name: "VioletDye",                     needed:   3 },
    ResearchItemDef { id: 1018, name: "PinkDye",                       needed:   3 },
    ResearchItemDef { id: 1019, name: "RedandBlackDye",                needed:   3 },
    ResearchItemDef { id: 1020, name: "OrangeandBlackDye",             needed:   3 },
    ResearchItemDef { id: 1021, name: "YellowandBlackDye",             needed:   3 },
    ResearchItemDef { id: 1022, name: "LimeandBlackDye",               needed:   3 },
    ResearchItemDef { id: 1023, name: "GreenandBlackDye",              needed:   3 },
    ResearchItemDef { id: 1024, name: "TealandBlackDye",               needed:   3 },
    ResearchItemDef { id: 1025, name: "CyanandBlackDye",               needed:   3 },
    ResearchItemDef { id: 1026, name: "SkyBlueandBlackDye",            needed:   3 },
    ResearchItemDef { id: 1027, name: "BlueandBlackDye",               needed:   3 },
    ResearchItemDef { id: 1028, name: "PurpleandBlackDye",             needed:   3 },
    ResearchItemDef { id: 1029, name: "VioletandBlackDye",             needed:   3 },
    ResearchItemDef { id: 1030, name: "PinkandBlackDye",               needed:   3 },
    ResearchItemDef { id: 1031, name: "FlameDye",                      needed:   3 },
    ResearchItemDef { id: 1032, name: "FlameAndBlackDye",              needed:   3 },
    ResearchItemDef { id: 1033, name: "GreenFlameDye",                 needed:   3 },
    ResearchItemDef { id: 1034, name: "GreenFlameAndBlackDye",         needed:   3 },
    ResearchItemDef { id: 1035, name: "BlueFlameDye",                  needed:   3 },
    ResearchItemDef { id: 1036, name: "BlueFlameAndBlackDye",          needed:   3 },
    ResearchItemDef { id: 1037, name: "SilverDye",                     needed:   3 },
    ResearchItemDef { id: 1038, name: "BrightRedDye",                  needed:   3 },
    ResearchItemDef { id: 1039, name: "BrightOrangeDye",               needed:   3 },
    ResearchItemDef { id: 1040, name: "BrightYellowDye",               needed:   3 },
    ResearchItemDef { id: 1041, name: "BrightLimeDye",                 needed:   3 },
    ResearchItemDef { id: 1042, name: "BrightGreenDye",                needed:   3 },
    ResearchItemDef { id: 1043, name: "BrightTealDye",                 needed:   3 },
    ResearchItemDef { id: 1044, name: "BrightCyanDye",                 needed:   3 },
    ResearchItemDef { id: 1045, name: "BrightSkyBlueDye",              needed:   3 },
    ResearchItemDef { id: 1046, name: "BrightBlueDye",                 needed:   3 },
    ResearchItemDef { id: 1047, name: "BrightPurpleDye",               needed:   3 },
    ResearchItemDef { id: 1048, name: "BrightVioletDye",               needed:   3 },
    ResearchItemDef { id: 1049, name: "BrightPinkDye",                 needed:   3 },
    ResearchItemDef { id: 1050, name: "BlackDye",                      needed:   3 },
    ResearchItemDef { id: 1051, name: "RedandSilverDye",               needed:   3 },
    ResearchItemDef { id: 1052, name: "OrangeandSilverDye",            needed:   3 },
    ResearchItemDef { id: 1053, name: "YellowandSilverDye",            needed:   3 },
    ResearchItemDef { id: 1054, name: "LimeandSilverDye",              needed:   3 },
    ResearchItemDef { id: 1055, name: "GreenandSilverDye",             needed:   3 },
    ResearchItemDef { id: 1056, name: "TealandSilverDye",              needed:   3 },
    ResearchItemDef { id: 1057, name: "CyanandSilverDye",              needed:   3 },
    ResearchItemDef { id: 1058, name: "SkyBlueandSilverDye",           needed:   3 },
    ResearchItemDef { id: 1059, name: "BlueandSilverDye",              needed:   3 },
    ResearchItemDef { id: 1060, name: "PurpleandSilverDye",            needed:   3 },
    ResearchItemDef { id: 1061, name: "VioletandSilverDye",            needed:   3 },
    ResearchItemDef { id: 1062, name: "PinkandSilverDye",              needed:   3 },
    ResearchItemDef { id: 1063, name: "IntenseFlameDye",               needed:   3 },
    ResearchItemDef { id: 1064, name: "IntenseGreenFlameDye",          needed:   3 },
    ResearchItemDef { id: 1065, name: "IntenseBlueFlameDye",           needed:   3 },
    ResearchItemDef { id: 1066, name: "RainbowDye",                    needed:   3 },
    ResearchItemDef { id: 1067, name: "IntenseRainbowDye",             needed:   3 },
    ResearchItemDef { id: 1068, name: "YellowGradientDye",             needed:   3 },
    ResearchItemDef { id: 1069, name: "CyanGradientDye",               needed:   3 },
    ResearchItemDef { id: 1070, name: "VioletGradientDye",             needed:   3 },
    ResearchItemDef { id: 1071, name: "Paintbrush",                    needed:   1 },
    ResearchItemDef { id: 1072, name: "PaintRoller",                   needed:   1 },
    ResearchItemDef { id: 1073, name: "RedPaint",                      needed:  25 },
    ResearchItemDef { id: 1074, name: "OrangePaint",                   needed:  25 },
    ResearchItemDef { id: 1075, name: "YellowPaint",                   needed:  25 },
    ResearchItemDef { id: 1076, name: "LimePaint",                     needed:  25 },
    ResearchItemDef { id: 1077, name: "GreenPaint",                    needed:  25 },
    ResearchItemDef { id: 1078, name: "TealPaint",                     needed:  25 },
    ResearchItemDef { id: 1079, name: "CyanPaint",                     needed:  25 },
    ResearchItemDef { id: 1080, name: "SkyBluePaint",                  needed:  25 },
    ResearchItemDef { id: 1081, name: "BluePaint",                     needed:  25 },
    ResearchItemDef { id: 1082, name: "PurplePaint",                   needed:  25 },
    ResearchItemDef { id: 1083, name: "VioletPaint",                   needed:  25 },
    ResearchItemDef { id: 1084, name: "PinkPaint",                     needed:  25 },
    ResearchItemDef { id: 1085, name: "DeepRedPaint",                  needed:  25 },
    ResearchItemDef { id: 1086, name: "DeepOrangePaint",               needed:  25 },
    ResearchItemDef { id: 1087, name: "DeepYellowPaint",               needed:  25 },
    ResearchItemDef { id: 1088, name: "DeepLimePaint",                 needed:  25 },
    ResearchItemDef { id: 1089, name: "DeepGreenPaint",                needed:  25 },
    ResearchItemDef { id: 1090, name: "DeepTealPaint",                 needed:  25 },
    ResearchItemDef { id: 1091, name: "DeepCyanPaint",                 needed:  25 },
    ResearchItemDef { id: 1092, name: "DeepSkyBluePaint",              needed:  25 },
    ResearchItemDef { id: 1093, name: "DeepBluePaint",                 needed:  25 },
    ResearchItemDef { id: 1094, name: "DeepPurplePaint",               needed:  25 },
    ResearchItemDef { id: 1095, name: "DeepVioletPaint",               needed:  25 },
    ResearchItemDef { id: 1096, name: "DeepPinkPaint",                 needed:  25 },
    ResearchItemDef { id: 1097, name: "BlackPaint",                    needed:  25 },
    ResearchItemDef { id: 1098, name: "WhitePaint",                    needed:  25 },
    ResearchItemDef { id: 1099, name: "GrayPaint",                     needed:  25 },
    ResearchItemDef { id: 1100, name: "PaintScraper",                  needed:   1 },
    ResearchItemDef { id: 1101, name: "LihzahrdBrick",                 needed: 100 },
    ResearchItemDef { id: 1102, name: "LihzahrdBrickWall",             needed: 400 },
    ResearchItemDef { id: 1103, name: "SlushBlock",                    needed: 100 },
    ResearchItemDef { id: 1104, name: "PalladiumOre",                  needed: 100 },
    ResearchItemDef { id: 1105, name: "OrichalcumOre",                 needed: 100 },
    ResearchItemDef { id: 1106, name: "TitaniumOre",                   needed: 100 },
    ResearchItemDef { id: 1107, name: "TealMushroom",                  needed:   3 },
    ResearchItemDef { id: 1108, name: "GreenMushroom",                 needed:   3 },
    ResearchItemDef { id: 1109, name: "SkyBlueFlower",                 needed:   3 },
    ResearchItemDef { id: 1110, name: "YellowMarigold",                needed:   3 },
    ResearchItemDef { id: 1111, name: "BlueBerries",                   needed:   3 },
    ResearchItemDef { id: 1112, name: "LimeKelp",                      needed:   3 },
    ResearchItemDef { id: 1113, name: "PinkPricklyPear",               needed:   3 },
    ResearchItemDef { id: 1114, name: "OrangeBloodroot",               needed:   3 },
    ResearchItemDef { id: 1115, name: "RedHusk",                       needed:   3 },
    ResearchItemDef { id: 1116, name: "CyanHusk",                      needed:   3 },
    ResearchItemDef { id: 1117, name: "VioletHusk",                    needed:   3 },
    ResearchItemDef { id: 1118, name: "PurpleMucos",                   needed:   3 },
    ResearchItemDef { id: 1119, name: "BlackInk",                      needed:   3 },
    ResearchItemDef { id: 1120, name: "DyeVat",                        needed:   1 },
    ResearchItemDef { id: 1121, name: "BeeGun",                        needed:   1 },
    ResearchItemDef { id: 1122, name: "PossessedHatchet",              needed:   1 },
    ResearchItemDef { id: 1123, name: "BeeKeeper",                     needed:   1 },
    ResearchItemDef { id: 1124, name: "Hive",                          needed: 100 },
    ResearchItemDef { id: 1125, name: "HoneyBlock",                    needed: 100 },
    ResearchItemDef { id: 1126, name: "HiveWall",                      needed: 400 },
    ResearchItemDef { id: 1127, name: "CrispyHoneyBlock",              needed: 100 },
    ResearchItemDef { id: 1128, name: "HoneyBucket",                   needed:   1 },
    ResearchItemDef { id: 1129, name: "HiveWand",                      needed:   1 },
    ResearchItemDef { id: 1130, name: "Beenade",                       needed:  99 },
    ResearchItemDef { id: 1131, name: "GravityGlobe",                  needed:   1 },
    ResearchItemDef { id: 1132, name: "HoneyComb",                     needed:   1 },
    ResearchItemDef { id: 1133, name: "Abeemination",                  needed:   3 },
    ResearchItemDef { id: 1134, name: "BottledHoney",                  needed:  30 },
    ResearchItemDef { id: 1135, name: "RainHat",                       needed:   1 },
    ResearchItemDef { id: 1136, name: "RainCoat",                      needed:   1 },
    ResearchItemDef { id: 1137, name: "LihzahrdDoor",                  needed:   1 },
    ResearchItemDef { id: 1138, name: "DungeonDoor",                   needed:   1 },
    ResearchItemDef { id: 1139, name: "LeadDoor",                      needed:   1 },
    ResearchItemDef { id: 1140, name: "IronDoor",                      needed:   1 },
    ResearchItemDef { id: 1141, name: "TempleKey",                     needed:   3 },
    ResearchItemDef { id: 1142, name: "LihzahrdChest",                 needed:   1 },
    ResearchItemDef { id: 1143, name: "LihzahrdChair",                 needed:   1 },
    ResearchItemDef { id: 1144, name: "LihzahrdTable",                 needed:   1 },
    ResearchItemDef { id: 1145, name: "LihzahrdWorkBench",             needed:   1 },
    ResearchItemDef { id: 1146, name: "SuperDartTrap",                 needed:   5 },
    ResearchItemDef { id: 1147, name: "FlameTrap",                     needed:   5 },
    ResearchItemDef { id: 1148, name: "SpikyBallTrap",                 needed:   5 },
    ResearchItemDef { id: 1149, name: "SpearTrap",                     needed:   5 },
    ResearchItemDef { id: 1150, name: "WoodenSpike",                   needed: 100 },
    ResearchItemDef { id: 1151, name: "LihzahrdPressurePlate",         needed:   5 },
    ResearchItemDef { id: 1152, name: "LihzahrdStatue",                needed:   1 },
    ResearchItemDef { id: 1153, name: "LihzahrdWatcherStatue",         needed:   1 },
    ResearchItemDef { id: 1154, name: "LihzahrdGuardianStatue",        needed:   1 },
    ResearchItemDef { id: 1155, name: "WaspGun",                       needed:   1 },
    ResearchItemDef { id: 1156, name: "PiranhaGun",                    needed:   1 },
    ResearchItemDef { id: 1157, name: "PygmyStaff",                    needed:   1 },
    ResearchItemDef { id: 1158, name: "PygmyNecklace",                 needed:   1 },
    ResearchItemDef { id: 1159, name: "TikiMask",                      needed:   1 },
    ResearchItemDef { id: 1160, name: "TikiShirt",                     needed:   1 },
    ResearchItemDef { id: 1161, name: "TikiPants",                     needed:   1 },
    ResearchItemDef { id: 1162, name: "LeafWings",                     needed:   1 },
    ResearchItemDef { id: 1163, name: "BlizzardinaBalloon",            needed:   1 },
    ResearchItemDef { id: 1164, name: "BundleofBalloons",              needed:   1 },
    ResearchItemDef { id: 1165, name: "BatWings",                      needed:   1 },
    ResearchItemDef { id: 1166, name: "BoneSword",                     needed:   1 },
    ResearchItemDef { id: 1167, name: "HerculesBeetle",                needed:   1 },
    ResearchItemDef { id: 1168, name: "SmokeBomb",                     needed:  99 },
    ResearchItemDef { id: 1169, name: "BoneKey",                       needed:   1 },
    ResearchItemDef { id: 1170, name: "Nectar",                        needed:   1 },
    ResearchItemDef { id: 1171, name: "TikiTotem",                     needed:   1 },
    ResearchItemDef { id: 1172, name: "LizardEgg",                     needed:   1 },
    ResearchItemDef { id: 1173, name: "GraveMarker",                   needed:   1 },
    ResearchItemDef { id: 1174, name: "CrossGraveMarker",              needed:   1 },
    ResearchItemDef { id: 1175, name: "Headstone",                     needed:   1 },
    ResearchItemDef { id: 1176, name: "Gravestone",                    needed:   1 },
    ResearchItemDef { id: 1177, name: "Obelisk",                       needed:   1 },
    ResearchItemDef { id: 1178, name: "LeafBlower",                    needed:   1 },
    ResearchItemDef { id: 1179, name: "ChlorophyteBullet",             needed:  99 },
    ResearchItemDef { id: 1180, name: "ParrotCracker",                 needed:   1 },
    ResearchItemDef { id: 1181, name: "StrangeGlowingMushroom",        needed:   1 },
    ResearchItemDef { id: 1182, name: "Seedling",                      needed:   1 },
    ResearchItemDef { id: 1183, name: "WispinaBottle",                 needed:   1 },
    ResearchItemDef { id: 1184, name: "PalladiumBar",                  needed:  25 },
    ResearchItemDef { id: 1185, name: "PalladiumSword",                needed:   1 },
    ResearchItemDef { id: 1186, name: "PalladiumPike",                 needed:   1 },
    ResearchItemDef { id: 1187, name: "PalladiumRepeater",             needed:   1 },
    ResearchItemDef { id: 1188, name: "PalladiumPickaxe",              needed:   1 },
    ResearchItemDef { id: 1189, name: "PalladiumDrill",                needed:   1 },
    ResearchItemDef { id: 1190, name: "PalladiumChainsaw",             needed:   1 },
    ResearchItemDef { id: 1191, name: "OrichalcumBar",                 needed:  25 },
    ResearchItemDef { id: 1192, name: "OrichalcumSword",               needed:   1 },
    ResearchItemDef { id: 1193, name: "OrichalcumHalberd",             needed:   1 },
    ResearchItemDef { id: 1194, name: "OrichalcumRepeater",            needed:   1 },
    ResearchItemDef { id: 1195, name: "OrichalcumPickaxe",             needed:   1 },
    ResearchItemDef { id: 1196, name: "OrichalcumDrill",               needed:   1 },
    ResearchItemDef { id: 1197, name: "OrichalcumChainsaw",            needed:   1 },
    ResearchItemDef { id: 1198, name: "TitaniumBar",                   needed:  25 },
    ResearchItemDef { id: 1199, name: "TitaniumSword",                 needed:   1 },
    ResearchItemDef { id: 1200, name: "TitaniumTrident",               needed:   1 },
    ResearchItemDef { id: 1201, name: "TitaniumRepeater",              needed:   1 },
    ResearchItemDef { id: 1202, name: "TitaniumPickaxe",               needed:   1 },
    ResearchItemDef { id: 1203, name: "TitaniumDrill",                 needed:   1 },
    ResearchItemDef { id: 1204, name: "TitaniumChainsaw",              needed:   1 },
    ResearchItemDef { id: 1205, name: "PalladiumMask",                 needed:   1 },
    ResearchItemDef { id: 1206, name: "PalladiumHelmet",               needed:   1 },
    ResearchItemDef { id: 1207, name: "PalladiumHeadgear",             needed:   1 },
    ResearchItemDef { id: 1208, name: "PalladiumBreastplate",          needed:   1 },
    ResearchItemDef { id: 1209, name: "PalladiumLeggings",             needed:   1 },
    ResearchItemDef { id: 1210, name: "OrichalcumMask",                needed:   1 },
    ResearchItemDef { id: 1211, name: "OrichalcumHelmet",              needed:   1 },
    ResearchItemDef { id: 1212, name: "OrichalcumHeadgear",            needed:   1 },
    ResearchItemDef { id: 1213, name: "OrichalcumBreastplate",         needed:   1 },
    ResearchItemDef { id: 1214, name: "OrichalcumLeggings",            needed:   1 },
    ResearchItemDef { id: 1215, name: "TitaniumMask",                  needed:   1 },
    ResearchItemDef { id: 1216, name: "TitaniumHelmet",                needed:   1 },
    ResearchItemDef { id: 1217, name: "TitaniumHeadgear",              needed:   1 },
    ResearchItemDef { id: 1218, name: "TitaniumBreastplate",           needed:   1 },
    ResearchItemDef { id: 1219, name: "TitaniumLeggings",              needed:   1 },
    ResearchItemDef { id: 1220, name: "OrichalcumAnvil",               needed:   1 },
    ResearchItemDef { id: 1221, name: "TitaniumForge",                 needed:   1 },
    ResearchItemDef { id: 1222, name: "PalladiumWaraxe",               needed:   1 },
    ResearchItemDef { id: 1223, name: "OrichalcumWaraxe",              needed:   1 },
    ResearchItemDef { id: 1224, name: "TitaniumWaraxe",                needed:   1 },
    ResearchItemDef { id: 1225, name: "HallowedBar",                   needed:  25 },
    ResearchItemDef { id: 1226, name: "ChlorophyteClaymore",           needed:   1 },
    ResearchItemDef { id: 1227, name: "ChlorophyteSaber",              needed:   1 },
    ResearchItemDef { id: 1228, name: "ChlorophytePartisan",           needed:   1 },
    ResearchItemDef { id: 1229, name: "ChlorophyteShotbow",            needed:   1 },
    ResearchItemDef { id: 1230, name: "ChlorophytePickaxe",            needed:   1 },
    ResearchItemDef { id: 1231, name: "ChlorophyteDrill",              needed:   1 },
    ResearchItemDef { id: 1232, name: "ChlorophyteChainsaw",           needed:   1 },
    ResearchItemDef { id: 1233, name: "ChlorophyteGreataxe",           needed:   1 },
    ResearchItemDef { id: 1234, name: "ChlorophyteWarhammer",          needed:   1 },
    ResearchItemDef { id: 1235, name: "ChlorophyteArrow",              needed:  99 },
    ResearchItemDef { id: 1236, name: "AmethystHook",                  needed:   1 },
    ResearchItemDef { id: 1237, name: "TopazHook",                     needed:   1 },
    ResearchItemDef { id: 1238, name: "SapphireHook",                  needed:   1 },
    ResearchItemDef { id: 1239, name: "EmeraldHook",                   needed:   1 },
    ResearchItemDef { id: 1240, name: "RubyHook",                      needed:   1 },
    ResearchItemDef { id: 1241, name: "DiamondHook",                   needed:   1 },
    ResearchItemDef { id: 1242, name: "AmberMosquito",                 needed:   1 },
    ResearchItemDef { id: 1243, name: "UmbrellaHat",                   needed:   1 },
    ResearchItemDef { id: 1244, name: "NimbusRod",                     needed:   1 },
    ResearchItemDef { id: 1245, name: "OrangeTorch",                   needed: 100 },
    ResearchItemDef { id: 1246, name: "CrimsandBlock",                 needed: 100 },
    ResearchItemDef { id: 1247, name: "BeeCloak",                      needed:   1 },
    ResearchItemDef { id: 1248, name: "EyeoftheGolem",                 needed:   1 },
    ResearchItemDef { id: 1249, name: "HoneyBalloon",                  needed:   1 },
    ResearchItemDef { id: 1250, name: "BlueHorseshoeBalloon",          needed:   1 },
    ResearchItemDef { id: 1251, name: "WhiteHorseshoeBalloon",         needed:   1 },
    ResearchItemDef { id: 1252, name: "YellowHorseshoeBalloon",        needed:   1 },
    ResearchItemDef { id: 1253, name: "FrozenTurtleShell",             needed:   1 },
    ResearchItemDef { id: 1254, name: "SniperRifle",                   needed:   1 },
    ResearchItemDef { id: 1255, name: "VenusMagnum",                   needed:   1 },
    ResearchItemDef { id: 1256, name: "CrimsonRod",                    needed:   1 },
    ResearchItemDef { id: 1257, name: "CrimtaneBar",                   needed:  25 },
    ResearchItemDef { id: 1258, name: "Stynger",                       needed:   1 },
    ResearchItemDef { id: 1259, name: "FlowerPow",                     needed:   1 },
    ResearchItemDef { id: 1260, name: "RainbowGun",                    needed:   1 },
    ResearchItemDef { id: 1261, name: "StyngerBolt",                   needed:  99 },
    ResearchItemDef { id: 1262, name: "ChlorophyteJackhammer",         needed:   1 },
    ResearchItemDef { id: 1263, name: "Teleporter",                    needed:   1 },
    ResearchItemDef { id: 1264, name: "FlowerofFrost",                 needed:   1 },
    ResearchItemDef { id: 1265, name: "Uzi",                           needed:   1 },
    ResearchItemDef { id: 1266, name: "MagnetSphere",                  needed:   1 },
    ResearchItemDef { id: 1267, name: "PurpleStainedGlass",            needed: 100 },
    ResearchItemDef { id: 1268, name: "YellowStainedGlass",            needed: 100 },
    ResearchItemDef { id: 1269, name: "BlueStainedGlass",              needed: 100 },
    ResearchItemDef { id: 1270, name: "GreenStainedGlass",             needed: 100 },
    ResearchItemDef { id: 1271, name: "RedStainedGlass",               needed: 100 },
    ResearchItemDef { id: 1272, name: "MulticoloredStainedGlass",      needed: 100 },
    ResearchItemDef { id: 1273, name: "SkeletronHand",                 needed:   1 },
    ResearchItemDef { id: 1274, name: "Skull",                         needed:   1 },
    ResearchItemDef { id: 1275, name: "BallaHat",                      needed:   1 },
    ResearchItemDef { id: 1276, name: "GangstaHat",                    needed:   1 },
    ResearchItemDef { id: 1277, name: "SailorHat",                     needed:   1 },
    ResearchItemDef { id: 1278, name: "EyePatch",                      needed:   1 },
    ResearchItemDef { id: 1279, name: "SailorShirt",                   needed:   1 },
    ResearchItemDef { id: 1280, name: "SailorPants",                   needed:   1 },
    ResearchItemDef { id: 1281, name: "SkeletronMask",                 needed:   1 },
    ResearchItemDef { id: 1282, name: "AmethystRobe",                  needed:   1 },
    ResearchItemDef { id: 1283, name: "TopazRobe",                     needed:   1 },
    ResearchItemDef { id: 1284, name: "SapphireRobe",                  needed:   1 },
    ResearchItemDef { id: 1285, name: "EmeraldRobe",                   needed:   1 },
    ResearchItemDef { id: 1286, name: "RubyRobe",                      needed:   1 },
    ResearchItemDef { id: 1287, name: "DiamondRobe",                   needed:   1 },
    ResearchItemDef { id: 1288, name: "WhiteTuxedoShirt",              needed:   1 },
    ResearchItemDef { id: 1289, name: "WhiteTuxedoPants",              needed:   1 },
    ResearchItemDef { id: 1290, name: "PanicNecklace",                 needed:   1 },
    ResearchItemDef { id: 1291, name: "LifeFruit",                     needed:  10 },
    ResearchItemDef { id: 1292, name: "LihzahrdAltar",                 needed:   1 },
    ResearchItemDef { id: 1293, name: "LihzahrdPowerCell",             needed:   3 },
    ResearchItemDef { id: 1294, name: "Picksaw",                       needed:   1 },
    ResearchItemDef { id: 1295, name: "HeatRay",                       needed:   1 },
    ResearchItemDef { id: 1296, name: "StaffofEarth",                  needed:   1 },
    ResearchItemDef { id: 1297, name: "GolemFist",                     needed:   1 },
    ResearchItemDef { id: 1298, name: "WaterChest",                    needed:   1 },
    ResearchItemDef { id: 1299, name: "Binoculars",                    needed:   1 },
    ResearchItemDef { id: 1300, name: "RifleScope",                    needed:   1 },
    ResearchItemDef { id: 1301, name: "DestroyerEmblem",               needed:   1 },
    ResearchItemDef { id: 1302, name: "HighVelocityBullet",            needed:  99 },
    ResearchItemDef { id: 1303, name: "JellyfishNecklace",             needed:   1 },
    ResearchItemDef { id: 1304, name: "ZombieArm",                     needed:   1 },
    ResearchItemDef { id: 1305, name: "TheAxe",                        needed:   1 },
    ResearchItemDef { id: 1306, name: "IceSickle",                     needed:   1 },
    ResearchItemDef { id: 1307, name: "ClothierVoodooDoll",            needed:   1 },
    ResearchItemDef { id: 1308, name: "PoisonStaff",                   needed:   1 },
    ResearchItemDef { id: 1309, name: "SlimeStaff",                    needed:   1 },
    ResearchItemDef { id: 1310, name: "PoisonDart",                    needed:  99 },
    ResearchItemDef { id: 1311, name: "EyeSpring",                     needed:   1 },
    ResearchItemDef { id: 1312, name: "ToySled",                       needed:   1 },
    ResearchItemDef { id: 1313, name: "BookofSkulls",                  needed:   1 },
    ResearchItemDef { id: 1314, name: "KOCannon",                      needed:   1 },
    ResearchItemDef { id: 1315, name: "PirateMap",                     needed:   3 },
    ResearchItemDef { id: 1316, name: "TurtleHelmet",                  needed:   1 },
    ResearchItemDef { id: 1317, name: "TurtleScaleMail",               needed:   1 },
    ResearchItemDef { id: 1318, name: "TurtleLeggings",                needed:   1 },
    ResearchItemDef { id: 1319, name: "SnowballCannon",                needed:   1 },
    ResearchItemDef { id: 1320, name: "BonePickaxe",                   needed:   1 },
    ResearchItemDef { id: 1321, name: "MagicQuiver",                   needed:   1 },
    ResearchItemDef { id: 1322, name: "MagmaStone",                    needed:   1 },
    ResearchItemDef { id: 1323, name: "ObsidianRose",                  needed:   1 },
    ResearchItemDef { id: 1324, name: "Bananarang",                    needed:   1 },
    ResearchItemDef { id: 1325, name: "ChainKnife",                    needed:   1 },
    ResearchItemDef { id: 1326, name: "RodofDiscord",                  needed:   1 },
    ResearchItemDef { id: 1327, name: "DeathSickle",                   needed:   1 },
    ResearchItemDef { id: 1328, name: "TurtleShell",                   needed:   3 },
    ResearchItemDef { id: 1329, name: "TissueSample",                  needed:  25 },
    ResearchItemDef { id: 1330, name: "Vertebrae",                     needed:  25 },
    ResearchItemDef { id: 1331, name: "BloodySpine",                   needed:   3 },
    ResearchItemDef { id: 1332, name: "Ichor",                         needed:  25 },
    ResearchItemDef { id: 1333, name: "IchorTorch",                    needed: 100 },
    ResearchItemDef { id: 1334, name: "IchorArrow",                    needed:  99 },
    ResearchItemDef { id: 1335, name: "IchorBullet",                   needed:  99 },
    ResearchItemDef { id: 1336, name: "GoldenShower",                  needed:   1 },
    ResearchItemDef { id: 1337, name: "BunnyCannon",                   needed:   1 },
    ResearchItemDef { id: 1338, name: "ExplosiveBunny",                needed:  99 },
    ResearchItemDef { id: 1339, name: "VialofVenom",                   needed:  25 },
    ResearchItemDef { id: 1340, name: "FlaskofVenom",                  needed:  20 },
    ResearchItemDef { id: 1341, name: "VenomArrow",                    needed:  99 },
    ResearchItemDef { id: 1342, name: "VenomBullet",                   needed:  99 },
    ResearchItemDef { id: 1343, name: "FireGauntlet",                  needed:   1 },
    ResearchItemDef { id: 1344, name: "Cog",                           needed: 100 },
    ResearchItemDef { id: 1345, name: "Confetti",                      needed:  99 },
    ResearchItemDef { id: 1346, name: "Nanites",                       needed:  99 },
    ResearchItemDef { id: 1347, name: "ExplosivePowder",               needed:  25 },
    ResearchItemDef { id: 1348, name: "GoldDust",                      needed:  99 },
    ResearchItemDef { id: 1349, name: "PartyBullet",                   needed:  99 },
    ResearchItemDef { id: 1350, name: "NanoBullet",                    needed:  99 },
    ResearchItemDef { id: 1351, name: "ExplodingBullet",               needed:  99 },
    ResearchItemDef { id: 1352, name: "GoldenBullet",                  needed:  99 },
    ResearchItemDef { id: 1353, name: "FlaskofCursedFlames",           needed:  20 },
    ResearchItemDef { id: 1354, name: "FlaskofFire",                   needed:  20 },
    ResearchItemDef { id: 1355, name: "FlaskofGold",                   needed:  20 },
    ResearchItemDef { id: 1356, name: "FlaskofIchor",                  needed:  20 },
    ResearchItemDef { id: 1357, name: "FlaskofNanites",                needed:  20 },
    ResearchItemDef { id: 1358, name: "FlaskofParty",                  needed:  20 },
    ResearchItemDef { id: 1359, name: "FlaskofPoison",                 needed:  20 },
    ResearchItemDef { id: 1360, name: "EyeofCthulhuTrophy",            needed:   1 },
    ResearchItemDef { id: 1361, name: "EaterofWorldsTrophy",           needed:   1 },
    ResearchItemDef { id: 1362, name: "BrainofCthulhuTrophy",          needed:   1 },
    ResearchItemDef { id: 1363, name: "SkeletronTrophy",               needed:   1 },
    ResearchItemDef { id: 1364, name: "QueenBeeTrophy",                needed:   1 },
    ResearchItemDef { id: 1365, name: "WallofFleshTrophy",             needed:   1 },
    ResearchItemDef { id: 1366, name: "DestroyerTrophy",               needed:   1 },
    ResearchItemDef { id: 1367, name: "SkeletronPrimeTrophy",          needed:   1 },
    ResearchItemDef { id: 1368, name: "RetinazerTrophy",               needed:   1 },
    ResearchItemDef { id: 1369, name: "SpazmatismTrophy",              needed:   1 },
    ResearchItemDef { id: 1370, name: "PlanteraTrophy",                needed:   1 },
    ResearchItemDef { id: 1371, name: "GolemTrophy",                   needed:   1 },
    ResearchItemDef { id: 1372, name: "BloodMoonRising",               needed:   1 },
    ResearchItemDef { id: 1373, name: "TheHangedMan",                  needed:   1 },
    ResearchItemDef { id: 1374, name: "GloryoftheFire",                needed:   1 },
    ResearchItemDef { id: 1375, name: "BoneWarp",                      needed:   1 },
    ResearchItemDef { id: 1376, name: "WallSkeleton",                  needed:   1 },
    ResearchItemDef { id: 1377, name: "HangingSkeleton",               needed:   1 },
    ResearchItemDef { id: 1378, name: "BlueSlabWall",                  needed: 400 },
    ResearchItemDef { id: 1379, name: "BlueTiledWall",                 needed: 400 },
    ResearchItemDef { id: 1380, name: "PinkSlabWall",                  needed: 400 },
    ResearchItemDef { id: 1381, name: "PinkTiledWall",                 needed: 400 },
    ResearchItemDef { id: 1382, name: "GreenSlabWall",                 needed: 400 },
    ResearchItemDef { id: 1383, name: "GreenTiledWall",                needed: 400 },
    ResearchItemDef { id: 1384, name: "BlueBrickPlatform",             needed: 200 },
    ResearchItemDef { id: 1385, name: "PinkBrickPlatform",             needed: 200 },
    ResearchItemDef { id: 1386, name: "GreenBrickPlatform",            needed: 200 },
    ResearchItemDef { id: 1387, name: "MetalShelf",                    needed:   1 },
    ResearchItemDef { id: 1388, name: "BrassShelf",                    needed:   1 },
    ResearchItemDef { id: 1389, name: "WoodShelf",                     needed:   1 },
    ResearchItemDef { id: 1390, name: "BrassLantern",                  needed:   1 },
    ResearchItemDef { id: 1391, name: "CagedLantern",                  needed:   1 },
    ResearchItemDef { id: 1392, name: "CarriageLantern",               needed:   1 },
    ResearchItemDef { id: 1393, name: "AlchemyLantern",                needed:   1 },
    ResearchItemDef { id: 1394, name: "DiablostLamp",                  needed:   1 },
    ResearchItemDef { id: 1395, name: "OilRagSconse",                  needed:   1 },
    ResearchItemDef { id: 1396, name: "BlueDungeonChair",              needed:   1 },
    ResearchItemDef { id: 1397, name: "BlueDungeonTable",              needed:   1 },
    ResearchItemDef { id: 1398, name: "BlueDungeonWorkBench",          needed:   1 },
    ResearchItemDef { id: 1399, name: "GreenDungeonChair",             needed:   1 },
    ResearchItemDef { id: 1400, name: "GreenDungeonTable",             needed:   1 },
    ResearchItemDef { id: 1401, name: "GreenDungeonWorkBench",         needed:   1 },
    ResearchItemDef { id: 1402, name: "PinkDungeonChair",              needed:   1 },
    ResearchItemDef { id: 1403, name: "PinkDungeonTable",              needed:   1 },
    ResearchItemDef { id: 1404, name: "PinkDungeonWorkBench",          needed:   1 },
    ResearchItemDef { id: 1405, name: "BlueDungeonCandle",             needed:   1 },
    ResearchItemDef { id: 1406, name: "GreenDungeonCandle",            needed:   1 },
    ResearchItemDef { id: 1407, name: "PinkDungeonCandle",             needed:   1 },
    ResearchItemDef { id: 1408, name: "BlueDungeonVase",               needed:   1 },
    ResearchItemDef { id: 1409, name: "GreenDungeonVase",              needed:   1 },
    ResearchItemDef { id: 1410, name: "PinkDungeonVase",               needed:   1 },
    ResearchItemDef { id: 1411, name: "BlueDungeonDoor",               needed:   1 },
    ResearchItemDef { id: 1412, name: "GreenDungeonDoor",              needed:   1 },
    ResearchItemDef { id: 1413, name: "PinkDungeonDoor",               needed:   1 },
    ResearchItemDef { id: 1414, name: "BlueDungeonBookcase",           needed:   1 },
    ResearchItemDef { id: 1415, name: "GreenDungeonBookcase",          needed:   1 },
    ResearchItemDef { id: 1416, name: "PinkDungeonBookcase",           needed:   1 },
    ResearchItemDef { id: 1417, name: "Catacomb",                      needed:   1 },
    ResearchItemDef { id: 1418, name: "DungeonShelf",                  needed:   1 },
    ResearchItemDef { id: 1419, name: "SkellingtonJSkellingsworth",    needed:   1 },
    ResearchItemDef { id: 1420, name: "TheCursedMan",                  needed:   1 },
    ResearchItemDef { id: 1421, name: "TheEyeSeestheEnd",              needed:   1 },
    ResearchItemDef { id: 1422, name: "SomethingEvilisWatchingYou",    needed:   1 },
    ResearchItemDef { id: 1423, name: "TheTwinsHaveAwoken",            needed:   1 },
    ResearchItemDef { id: 1424, name: "TheScreamer",                   needed:   1 },
    ResearchItemDef { id: 1425, name: "GoblinsPlayingPoker",           needed:   1 },
    ResearchItemDef { id: 1426, name: "Dryadisque",                    needed:   1 },
    ResearchItemDef { id: 1427, name: "Sunflowers",                    needed:   1 },
    ResearchItemDef { id: 1428, name: "TerrarianGothic",               needed:   1 },
    ResearchItemDef { id: 1429, name: "Beanie",                        needed:   1 },
    ResearchItemDef { id: 1430, name: "ImbuingStation",                needed:   1 },
    ResearchItemDef { id: 1431, name: "StarinaBottle",                 needed:   1 },
    ResearchItemDef { id: 1432, name: "EmptyBullet",                   needed:  99 },
    ResearchItemDef { id: 1433, name: "Impact",                        needed:   1 },
    ResearchItemDef { id: 1434, name: "PoweredbyBirds",                needed:   1 },
    ResearchItemDef { id: 1435, name: "TheDestroyer",                  needed:   1 },
    ResearchItemDef { id: 1436, name: "ThePersistencyofEyes",          needed:   1 },
    ResearchItemDef { id: 1437, name: "UnicornCrossingtheHallows",     needed:   1 },
    ResearchItemDef { id: 1438, name: "GreatWave",                     needed:   1 },
    ResearchItemDef { id: 1439, name: "StarryNight",                   needed:   1 },
    ResearchItemDef { id: 1440, name: "GuidePicasso",                  needed:   1 },
    ResearchItemDef { id: 1441, name: "TheGuardiansGaze",              needed:   1 },
    ResearchItemDef { id: 1442, name: "FatherofSomeone",               needed:   1 },
    ResearchItemDef { id: 1443, name: "NurseLisa",                     needed:   1 },
    ResearchItemDef { id: 1444, name: "ShadowbeamStaff",               needed:   1 },
    ResearchItemDef { id: 1445, name: "InfernoFork",                   needed:   1 },
    ResearchItemDef { id: 1446, name: "SpectreStaff",                  needed:   1 },
    ResearchItemDef { id: 1447, name: "WoodenFence",                   needed:   1 },
    ResearchItemDef { id: 1448, name: "LeadFence",                     needed:   1 },
    ResearchItemDef { id: 1449, name: "BubbleMachine",                 needed:   1 },
    ResearchItemDef { id: 1450, name: "BubbleWand",                    needed:   1 },
    ResearchItemDef { id: 1451, name: "MarchingBonesBanner",           needed:   1 },
    ResearchItemDef { id: 1452, name: "NecromanticSign",               needed:   1 },
    ResearchItemDef { id: 1453, name: "RustedCompanyStandard",         needed:   1 },
    ResearchItemDef { id: 1454, name: "RaggedBrotherhoodSigil",        needed:   1 },
    ResearchItemDef { id: 1455, name: "MoltenLegionFlag",              needed:   1 },
    ResearchItemDef { id: 1456, name: "DiabolicSigil",                 needed:   1 },
    ResearchItemDef { id: 1457, name: "ObsidianPlatform",              needed: 200 },
    ResearchItemDef { id: 1458, name: "ObsidianDoor",                  needed:   1 },
    ResearchItemDef { id: 1459, name: "ObsidianChair",                 needed:   1 },
    ResearchItemDef { id: 1460, name: "ObsidianTable",                 needed:   1 },
    ResearchItemDef { id: 1461, name: "ObsidianWorkBench",             needed:   1 },
    ResearchItemDef { id: 1462, name: "ObsidianVase",                  needed:   1 },
    ResearchItemDef { id: 1463, name: "ObsidianBookcase",              needed:   1 },
    ResearchItemDef { id: 1464, name: "HellboundBanner",               needed:   1 },
    ResearchItemDef { id: 1465, name: "HellHammerBanner",              needed:   1 },
    ResearchItemDef { id: 1466, name: "HelltowerBanner",               needed:   1 },
    ResearchItemDef { id: 1467, name: "LostHopesofManBanner",          needed:   1 },
    ResearchItemDef { id: 1468, name: "ObsidianWatcherBanner",         needed:   1 },
    ResearchItemDef { id: 1469, name: "LavaEruptsBanner",              needed:   1 },
    ResearchItemDef { id: 1470, name: "BlueDungeonBed",                needed:   1 },
    ResearchItemDef { id: 1471, name: "GreenDungeonBed",               needed:   1 },
    ResearchItemDef { id: 1472, name: "PinkDungeonBed",                needed:   1 },
    ResearchItemDef { id: 1473, name: "ObsidianBed",                   needed:   1 },
    ResearchItemDef { id: 1474, name: "Waldo",                         needed:   1 },
    ResearchItemDef { id: 1475, name: "Darkness",                      needed:   1 },
    ResearchItemDef { id: 1476, name: "DarkSoulReaper",                needed:   1 },
    ResearchItemDef { id: 1477, name: "Land",                          needed:   1 },
    ResearchItemDef { id: 1478, name: "TrappedGhost",                  needed:   1 },
    ResearchItemDef { id: 1479, name: "DemonsEye",                     needed:   1 },
    ResearchItemDef { id: 1480, name: "FindingGold",                   needed:   1 },
    ResearchItemDef { id: 1481, name: "FirstEncounter",                needed:   1 },
    ResearchItemDef { id: 1482, name: "GoodMorning",                   needed:   1 },
    ResearchItemDef { id: 1483, name: "UndergroundReward",             needed:   1 },
    ResearchItemDef { id: 1484, name: "ThroughtheWindow",              needed:   1 },
    ResearchItemDef { id: 1485, name: "PlaceAbovetheClouds",           needed:   1 },
    ResearchItemDef { id: 1486, name: "DoNotStepontheGrass",           needed:   1 },
    ResearchItemDef { id: 1487, name: "ColdWatersintheWhiteLand",      needed:   1 },
    ResearchItemDef { id: 1488, name: "LightlessChasms",               needed:   1 },
    ResearchItemDef { id: 1489, name: "TheLandofDeceivingLooks",       needed:   1 },
    ResearchItemDef { id: 1490, name: "Daylight",                      needed:   1 },
    ResearchItemDef { id: 1491, name: "SecretoftheSands",              needed:   1 },
    ResearchItemDef { id: 1492, name: "DeadlandComesAlive",            needed:   1 },
    ResearchItemDef { id: 1493, name: "EvilPresence",                  needed:   1 },
    ResearchItemDef { id: 1494, name: "SkyGuardian",                   needed:   1 },
    ResearchItemDef { id: 1495, name: "AmericanExplosive",             needed:   1 },
    ResearchItemDef { id: 1496, name: "Discover",                      needed:   1 },
    ResearchItemDef { id: 1497, name: "HandEarth",                     needed:   1 },
    ResearchItemDef { id: 1498, name: "OldMiner",                      needed:   1 },
    ResearchItemDef { id: 1499, name: "Skelehead",                     needed:   1 },
    ResearchItemDef { id: 1500, name: "FacingtheCerebralMastermind",   needed:   1 },
    ResearchItemDef { id: 1501, name: "LakeofFire",                    needed:   1 },
    ResearchItemDef { id: 1502, name: "TrioSuperHeroes",               needed:   1 },
    ResearchItemDef { id: 1503, name: "SpectreHood",                   needed:   1 },
    ResearchItemDef { id: 1504, name: "SpectreRobe",                   needed:   1 },
    ResearchItemDef { id: 1505, name: "SpectrePants",                  needed:   1 },
    ResearchItemDef { id: 1506, name: "SpectrePickaxe",                needed:   1 },
    ResearchItemDef { id: 1507, name: "SpectreHamaxe",                 needed:   1 },
    ResearchItemDef { id: 1508, name: "Ectoplasm",                     needed:  25 },
    ResearchItemDef { id: 1509, name: "GothicChair",                   needed:   1 },
    ResearchItemDef { id: 1510, name: "GothicTable",                   needed:   1 },
    ResearchItemDef { id: 1511, name: "GothicWorkBench",               needed:   1 },
    ResearchItemDef { id: 1512, name: "GothicBookcase",                needed:   1 },
    ResearchItemDef { id: 1513, name: "PaladinsHammer",                needed:   1 },
    ResearchItemDef { id: 1514, name: "SWATHelmet",                    needed:   1 },
    ResearchItemDef { id: 1515, name: "BeeWings",                      needed:   1 },
    ResearchItemDef { id: 1516, name: "GiantHarpyFeather",             needed:   3 },
    ResearchItemDef { id: 1517, name: "BoneFeather",                   needed:   3 },
    ResearchItemDef { id: 1518, name: "FireFeather",                   needed:   3 },
    ResearchItemDef { id: 1519, name: "IceFeather",                    needed:   3 },
    ResearchItemDef { id: 1520, name: "BrokenBatWing",                 needed:   3 },
    ResearchItemDef { id: 1521, name: "TatteredBeeWing",               needed:   3 },
    ResearchItemDef { id: 1522, name: "LargeAmethyst",                 needed:   1 },
    ResearchItemDef { id: 1523, name: "LargeTopaz",                    needed:   1 },
    ResearchItemDef { id: 1524, name: "LargeSapphire",                 needed:   1 },
    ResearchItemDef { id: 1525, name: "LargeEmerald",                  needed:   1 },
    ResearchItemDef { id: 1526, name: "LargeRuby",                     needed:   1 },
    ResearchItemDef { id: 1527, name: "LargeDiamond",                  needed:   1 },
    ResearchItemDef { id: 1528, name: "JungleChest",                   needed:   1 },
    ResearchItemDef { id: 1529, name: "CorruptionChest",               needed:   1 },
    ResearchItemDef { id: 1530, name: "CrimsonChest",                  needed:   1 },
    ResearchItemDef { id: 1531, name: "HallowedChest",                 needed:   1 },
    ResearchItemDef { id: 1532, name: "FrozenChest",                   needed:   1 },
    ResearchItemDef { id: 1533, name: "JungleKey",                     needed:   1 },
    ResearchItemDef { id: 1534, name: "CorruptionKey",                 needed:   1 },
    ResearchItemDef { id: 1535, name: "CrimsonKey",                    needed:   1 },
    ResearchItemDef { id: 1536, name: "HallowedKey",                   needed:   1 },
    ResearchItemDef { id: 1537, name: "FrozenKey",                     needed:   1 },
    ResearchItemDef { id: 1538, name: "ImpFace",                       needed:   1 },
    ResearchItemDef { id: 1539, name: "OminousPresence",               needed:   1 },
    ResearchItemDef { id: 1540, name: "ShiningMoon",                   needed:   1 },
    ResearchItemDef { id: 1541, name: "LivingGore",                    needed:   1 },
    ResearchItemDef { id: 1542, name: "FlowingMagma",                  needed:   1 },
    ResearchItemDef { id: 1543, name: "SpectrePaintbrush",             needed:   1 },
    ResearchItemDef { id: 1544, name: "SpectrePaintRoller",            needed:   1 },
    ResearchItemDef { id: 1545, name: "SpectrePaintScraper",           needed:   1 },
    ResearchItemDef { id: 1546, name: "ShroomiteHeadgear",             needed:   1 },
    ResearchItemDef { id: 1547, name: "ShroomiteMask",                 needed:   1 },
    ResearchItemDef { id: 1548, name: "ShroomiteHelmet",               needed:   1 },
    ResearchItemDef { id: 1549, name: "ShroomiteBreastplate",          needed:   1 },
    ResearchItemDef { id: 1550, name: "ShroomiteLeggings",             needed:   1 },
    ResearchItemDef { id: 1551, name: "Autohammer",                    needed:   1 },
    ResearchItemDef { id: 1552, name: "ShroomiteBar",                  needed:  25 },
    ResearchItemDef { id: 1553, name: "SDMG",                          needed:   1 },
    ResearchItemDef { id: 1554, name: "CenxsTiara",                    needed:   1 },
    ResearchItemDef { id: 1555, name: "CenxsBreastplate",              needed:   1 },
    ResearchItemDef { id: 1556, name: "CenxsLeggings",                 needed:   1 },
    ResearchItemDef { id: 1557, name: "CrownosMask",                   needed:   1 },
    ResearchItemDef { id: 1558, name: "CrownosBreastplate",            needed:   1 },
    ResearchItemDef { id: 1559, name: "CrownosLeggings",               needed:   1 },
    ResearchItemDef { id: 1560, name: "WillsHelmet",                   needed:   1 },
    ResearchItemDef { id: 1561, name: "WillsBreastplate",              needed:   1 },
    ResearchItemDef { id: 1562, name: "WillsLeggings",                 needed:   1 },
    ResearchItemDef { id: 1563, name: "JimsHelmet",                    needed:   1 },
    ResearchItemDef { id: 1564, name: "JimsBreastplate",               needed:   1 },
    ResearchItemDef { id: 1565, name: "JimsLeggings",                  needed:   1 },
    ResearchItemDef { id: 1566, name: "AaronsHelmet",                  needed:   1 },
    ResearchItemDef { id: 1567, name: "AaronsBreastplate",             needed:   1 },
    ResearchItemDef { id: 1568, name: "AaronsLeggings",                needed:   1 },
    ResearchItemDef { id: 1569, name: "VampireKnives",                 needed:   1 },
    ResearchItemDef { id: 1570, name: "BrokenHeroSword",               needed:   1 },
    ResearchItemDef { id: 1571, name: "ScourgeoftheCorruptor",         needed:   1 },
    ResearchItemDef { id: 1572, name: "StaffoftheFrostHydra",          needed:   1 },
    ResearchItemDef { id: 1573, name: "TheCreationoftheGuide",         needed:   1 },
    ResearchItemDef { id: 1574, name: "TheMerchant",                   needed:   1 },
    ResearchItemDef { id: 1575, name: "CrownoDevoursHisLunch",         needed:   1 },
    ResearchItemDef { id: 1576, name: "RareEnchantment",               needed:   1 },
    ResearchItemDef { id: 1577, name: "GloriousNight",                 needed:   1 },
    ResearchItemDef { id: 1578, name: "SweetheartNecklace",            needed:   1 },
    ResearchItemDef { id: 1579, name: "FlurryBoots",                   needed:   1 },
    ResearchItemDef { id: 1580, name: "DTownsHelmet",                  needed:   1 },
    ResearchItemDef { id: 1581, name: "DTownsBreastplate",             needed:   1 },
    ResearchItemDef { id: 1582, name: "DTownsLeggings",                needed:   1 },
    ResearchItemDef { id: 1583, name: "DTownsWings",                   needed:   1 },
    ResearchItemDef { id: 1584, name: "WillsWings",                    needed:   1 },
    ResearchItemDef { id: 1585, name: "CrownosWings",                  needed:   1 },
    ResearchItemDef { id: 1586, name: "CenxsWings",                    needed:   1 },
    ResearchItemDef { id: 1587, name: "CenxsDress",                    needed:   1 },
    ResearchItemDef { id: 1588, name: "CenxsDressPants",               needed:   1 },
    ResearchItemDef { id: 1589, name: "PalladiumColumn",               needed:   1 },
    ResearchItemDef { id: 1590, name: "PalladiumColumnWall",           needed: 400 },
    ResearchItemDef { id: 1591, name: "BubblegumBlock",                needed: 100 },
    ResearchItemDef { id: 1592, name: "BubblegumBlockWall",            needed: 400 },
    ResearchItemDef { id: 1593, name: "TitanstoneBlock",               needed: 100 },
    ResearchItemDef { id: 1594, name: "TitanstoneBlockWall",           needed: 400 },
    ResearchItemDef { id: 1595, name: "MagicCuffs",                    needed:   1 },
    ResearchItemDef { id: 1596, name: "MusicBoxSnow",                  needed:   1 },
    ResearchItemDef { id: 1597, name: "MusicBoxSpace",                 needed:   1 },
    ResearchItemDef { id: 1598, name: "MusicBoxCrimson",               needed:   1 },
    ResearchItemDef { id: 1599, name: "MusicBoxBoss4",                 needed:   1 },
    ResearchItemDef { id: 1600, name: "MusicBoxAltOverworldDay",       needed:   1 },
    ResearchItemDef { id: 1601, name: "MusicBoxRain",                  needed:   1 },
    ResearchItemDef { id: 1602, name: "MusicBoxIce",                   needed:   1 },
    ResearchItemDef { id: 1603, name: "MusicBoxDesert",                needed:   1 },
    ResearchItemDef { id: 1604, name: "MusicBoxOcean",                 needed:   1 },
    ResearchItemDef { id: 1605, name: "MusicBoxDungeon",               needed:   1 },
    ResearchItemDef { id: 1606, name: "MusicBoxPlantera",              needed:   1 },
    ResearchItemDef { id: 1607, name: "MusicBoxBoss5",                 needed:   1 },
    ResearchItemDef { id: 1608, name: "MusicBoxTemple",                needed:   1 },
    ResearchItemDef { id: 1609, name: "MusicBoxEclipse",               needed:   1 },
    ResearchItemDef { id: 1610, name: "MusicBoxMushrooms",             needed:   1 },
    ResearchItemDef { id: 1611, name: "ButterflyDust",                 needed:   3 },
    ResearchItemDef { id: 1612, name: "AnkhCharm",                     needed:   1 },
    ResearchItemDef { id: 1613, name: "AnkhShield",                    needed:   1 },
    ResearchItemDef { id: 1614, name: "BlueFlare",                     needed:  99 },
    ResearchItemDef { id: 1615, name: "AnglerFishBanner",              needed:   1 },
    ResearchItemDef { id: 1616, name: "AngryNimbusBanner",             needed:   1 },
    ResearchItemDef { id: 1617, name: "AnomuraFungusBanner",           needed:   1 },
    ResearchItemDef { id: 1618, name: "AntlionBanner",                 needed:   1 },
    ResearchItemDef { id: 1619, name: "ArapaimaBanner",                needed:   1 },
    ResearchItemDef { id: 1620, name: "ArmoredSkeletonBanner",         needed:   1 },
    ResearchItemDef { id: 1621, name: "BatBanner",                     needed:   1 },
    ResearchItemDef { id: 1622, name: "BirdBanner",                    needed:   1 },
    ResearchItemDef { id: 1623, name: "BlackRecluseBanner",            needed:   1 },
    ResearchItemDef { id: 1624, name: "BloodFeederBanner",             needed:   1 },
    ResearchItemDef { id: 1625, name: "BloodJellyBanner",              needed:   1 },
    ResearchItemDef { id: 1626, name: "BloodCrawlerBanner",            needed:   1 },
    ResearchItemDef { id: 1627, name: "BoneSerpentBanner",             needed:   1 },
    ResearchItemDef { id: 1628, name: "BunnyBanner",                   needed:   1 },
    ResearchItemDef { id: 1629, name: "ChaosElementalBanner",          needed:   1 },
    ResearchItemDef { id: 1630, name: "MimicBanner",                   needed:   1 },
    ResearchItemDef { id: 1631, name: "ClownBanner",                   needed:   1 },
    ResearchItemDef { id: 1632, name: "CorruptBunnyBanner",            needed:   1 },
    ResearchItemDef { id: 1633, name: "CorruptGoldfishBanner",         needed:   1 },
    ResearchItemDef { id: 1634, name: "CrabBanner",                    needed:   1 },
    ResearchItemDef { id: 1635, name: "CrimeraBanner",                 needed:   1 },
    ResearchItemDef { id: 1636, name: "CrimsonAxeBanner",              needed:   1 },
    ResearchItemDef { id: 1637, name: "CursedHammerBanner",            needed:   1 },
    ResearchItemDef { id: 1638, name: "DemonBanner",                   needed:   1 },
    ResearchItemDef { id: 1639, name: "DemonEyeBanner",                needed:   1 },
    ResearchItemDef { id: 1640, name: "DerplingBanner",                needed:   1 },
    ResearchItemDef { id: 1641, name: "EaterofSoulsBanner",            needed:   1 },
    ResearchItemDef { id: 1642, name: "EnchantedSwordBanner",          needed:   1 },
    ResearchItemDef { id: 1643, name: "ZombieEskimoBanner",            needed:   1 },
    ResearchItemDef { id: 1644, name: "FaceMonsterBanner",             needed:   1 },
    ResearchItemDef { id: 1645, name: "FloatyGrossBanner",             needed:   1 },
    ResearchItemDef { id: 1646, name: "FlyingFishBanner",              needed:   1 },
    ResearchItemDef { id: 1647, name: "FlyingSnakeBanner",             needed:   1 },
    ResearchItemDef { id: 1648, name: "FrankensteinBanner",            needed:   1 },
    ResearchItemDef { id: 1649, name: "FungiBulbBanner",               needed:   1 },
    ResearchItemDef { id: 1650, name: "FungoFishBanner",               needed:   1 },
    ResearchItemDef { id: 1651, name: "GastropodBanner",               needed:   1 },
    ResearchItemDef { id: 1652, name: "GoblinThiefBanner",             needed:   1 },
    ResearchItemDef { id: 1653, name: "GoblinSorcererBanner",          needed:   1 },
    ResearchItemDef { id: 1654, name: "GoblinPeonBanner",              needed:   1 },
    ResearchItemDef { id: 1655, name: "GoblinScoutBanner",             needed:   1 },
    ResearchItemDef { id: 1656, name: "GoblinWarriorBanner",           needed:   1 },
    ResearchItemDef { id: 1657, name: "GoldfishBanner",                needed:   1 },
    ResearchItemDef { id: 1658, name: "HarpyBanner",                   needed:   1 },
    ResearchItemDef { id: 1659, name: "HellbatBanner",                 needed:   1 },
    ResearchItemDef { id: 1660, name: "HerplingBanner",                needed:   1 },
    ResearchItemDef { id: 1661, name: "HornetBanner",                  needed:   1 },
    ResearchItemDef { id: 1662, name: "IceElementalBanner",            needed:   1 },
    ResearchItemDef { id: 1663, name: "IcyMermanBanner",               needed:   1 },
    ResearchItemDef { id: 1664, name: "FireImpBanner",                 needed:   1 },
    ResearchItemDef { id: 1665, name: "JellyfishBanner",               needed:   1 },
    ResearchItemDef { id: 1666, name: "JungleCreeperBanner",           needed:   1 },
    ResearchItemDef { id: 1667, name: "LihzahrdBanner",                needed:   1 },
    ResearchItemDef { id: 1668, name: "ManEaterBanner",                needed:   1 },
    ResearchItemDef { id: 1669, name: "MeteorHeadBanner",              needed:   1 },
    ResearchItemDef { id: 1670, name: "MothBanner",                    needed:   1 },
    ResearchItemDef { id: 1671, name: "MummyBanner",                   needed:   1 },
    ResearchItemDef { id: 1672, name: "MushiLadybugBanner",            needed:   1 },
    ResearchItemDef { id: 1673, name: "ParrotBanner",                  needed:   1 },
    ResearchItemDef { id: 1674, name: "PigronBanner",                  needed:   1 },
    ResearchItemDef { id: 1675, name: "PiranhaBanner",                 needed:   1 },
    ResearchItemDef { id: 1676, name: "PirateBanner",                  needed:   1 },
    ResearchItemDef { id: 1677, name: "PixieBanner",                   needed:   1 },
    ResearchItemDef { id: 1678, name: "RaincoatZombieBanner",          needed:   1 },
    ResearchItemDef { id: 1679, name: "ReaperBanner",                  needed:   1 },
    ResearchItemDef { id: 1680, name: "SharkBanner",                   needed:   1 },
    ResearchItemDef { id: 1681, name: "SkeletonBanner",                needed:   1 },
    ResearchItemDef { id: 1682, name: "SkeletonMageBanner",            needed:   1 },
    ResearchItemDef { id: 1683, name: "SlimeBanner",                   needed:   1 },
    ResearchItemDef { id: 1684, name: "SnowFlinxBanner",               needed:   1 },
    ResearchItemDef { id: 1685, name: "SpiderBanner",                  needed:   1 },
    ResearchItemDef { id: 1686, name: "SporeZombieBanner",             needed:   1 },
    ResearchItemDef { id: 1687, name: "SwampThingBanner",              needed:   1 },
    ResearchItemDef { id: 1688, name: "TortoiseBanner",                needed:   1 },
    ResearchItemDef { id: 1689, name: "ToxicSludgeBanner",             needed:   1 },
    ResearchItemDef { id: 1690, name: "UmbrellaSlimeBanner",           needed:   1 },
    ResearchItemDef { id: 1691, name: "UnicornBanner",                 needed:   1 },
    ResearchItemDef { id: 1692, name: "VampireBanner",                 needed:   1 },
    ResearchItemDef { id: 1693, name: "VultureBanner",                 needed:   1 },
    ResearchItemDef { id: 1694, name: "NypmhBanner",                   needed:   1 },
    ResearchItemDef { id: 1695, name: "WerewolfBanner",                needed:   1 },
    ResearchItemDef { id: 1696, name: "WolfBanner",                    needed:   1 },
    ResearchItemDef { id: 1697, name: "WorldFeederBanner",             needed:   1 },
    ResearchItemDef { id: 1698, name: "WormBanner",                    needed:   1 },
    ResearchItemDef { id: 1699, name: "WraithBanner",                  needed:   1 },
    ResearchItemDef { id: 1700, name: "WyvernBanner",                  needed:   1 },
    ResearchItemDef { id: 1701, name: "ZombieBanner",                  needed:   1 },
    ResearchItemDef { id: 1702, name: "GlassPlatform",                 needed: 200 },
    ResearchItemDef { id: 1703, name: "GlassChair",                    needed:   1 },
    ResearchItemDef { id: 1704, name: "GoldenChair",                   needed:   1 },
    ResearchItemDef { id: 1705, name: "GoldenToilet",                  needed:   1 },
    ResearchItemDef { id: 1706, name: "BarStool",                      needed:   1 },
    ResearchItemDef { id: 1707, name: "HoneyChair",                    needed:   1 },
    ResearchItemDef { id: 1708, name: "SteampunkChair",                needed:   1 },
    ResearchItemDef { id: 1709, name: "GlassDoor",                     needed:   1 },
    ResearchItemDef { id: 1710, name: "GoldenDoor",                    needed:   1 },
    ResearchItemDef { id: 1711, name: "HoneyDoor",                     needed:   1 },
    ResearchItemDef { id: 1712, name: "SteampunkDoor",                 needed:   1 },
    ResearchItemDef { id: 1713, name: "GlassTable",                    needed:   1 },
    ResearchItemDef { id: 1714, name: "BanquetTable",                  needed:   1 },
    ResearchItemDef { id: 1715, name: "Bar",                           needed:   1 },
    ResearchItemDef { id: 1716, name: "GoldenTable",                   needed:   1 },
    ResearchItemDef { id: 1717, name: "HoneyTable",                    needed:   1 },
    ResearchItemDef { id: 1718, name: "SteampunkTable",                needed:   1 },
    ResearchItemDef { id: 1719, name: "GlassBed",                      needed:   1 },
    ResearchItemDef { id: 1720, name: "GoldenBed",                     needed:   1 },
    ResearchItemDef { id: 1721, name: "HoneyBed",                      needed:   1 },
    ResearchItemDef { id: 1722, name: "SteampunkBed",                  needed:   1 },
    ResearchItemDef { id: 1723, name: "LivingWoodWall",                needed: 400 },
    ResearchItemDef { id: 1724, name: "FartinaJar",                    needed:   1 },
    ResearchItemDef { id: 1725, name: "Pumpkin",                       needed: 100 },
    ResearchItemDef { id: 1726, name: "PumpkinWall",                   needed: 400 },
    ResearchItemDef { id: 1727, name: "Hay",                           needed: 100 },
    ResearchItemDef { id: 1728, name: "HayWall",                       needed: 400 },
    ResearchItemDef { id: 1729, name: "SpookyWood",                    needed: 100 },
    ResearchItemDef { id: 1730, name: "SpookyWoodWall",                needed: 400 },
    ResearchItemDef { id: 1731, name: "PumpkinHelmet",                 needed:   1 },
    ResearchItemDef { id: 1732, name: "PumpkinBreastplate",            needed:   1 },
    ResearchItemDef { id: 1733, name: "PumpkinLeggings",               needed:   1 },
    ResearchItemDef { id: 1736, name: "NurseHat",                      needed:   1 },
    ResearchItemDef { id: 1737, name: "NurseShirt",                    needed:   1 },
    ResearchItemDef { id: 1738, name: "NursePants",                    needed:   1 },
    ResearchItemDef { id: 1739, name: "WizardsHat",                    needed:   1 },
    ResearchItemDef { id: 1740, name: "GuyFawkesMask",                 needed:   1 },
    ResearchItemDef { id: 1741, name: "DyeTraderRobe",                 needed:   1 },
    ResearchItemDef { id: 1742, name: "SteampunkGoggles",              needed:   1 },
    ResearchItemDef { id: 1743, name: "CyborgHelmet",                  needed:   1 },
    ResearchItemDef { id: 1744, name: "CyborgShirt",                   needed:   1 },
    ResearchItemDef { id: 1745, name: "CyborgPants",                   needed:   1 },
    ResearchItemDef { id: 1746, name: "CreeperMask",                   needed:   1 },
    ResearchItemDef { id: 1747, name: "CreeperShirt",                  needed:   1 },
    ResearchItemDef { id: 1748, name: "CreeperPants",                  needed:   1 },
    ResearchItemDef { id: 1749, name: "CatMask",                       needed:   1 },
    ResearchItemDef { id: 1750, name: "CatShirt",                      needed:   1 },
    ResearchItemDef { id: 1751, name: "CatPants",                      needed:   1 },
    ResearchItemDef { id: 1752, name: "GhostMask",                     needed:   1 },
    ResearchItemDef { id: 1753, name: "GhostShirt",                    needed:   1 },
    ResearchItemDef { id: 1754, name: "PumpkinMask",                   needed:   1 },
    ResearchItemDef { id: 1755, name: "PumpkinShirt",                  needed:   1 },
    ResearchItemDef { id: 1756, name: "PumpkinPants",                  needed:   1 },
    ResearchItemDef { id: 1757, name: "RobotMask",                     needed:   1 },
    ResearchItemDef { id: 1758, name: "RobotShirt",                    needed:   1 },
    ResearchItemDef { id: 1759, name: "RobotPants",                    needed:   1 },
    ResearchItemDef { id: 1760, name: "UnicornMask",                   needed:   1 },
    ResearchItemDef { id: 1761, name: "UnicornShirt",                  needed:   1 },
    ResearchItemDef { id: 1762, name: "UnicornPants",                  needed:   1 },
    ResearchItemDef { id: 1763, name: "VampireMask",                   needed:   1 },
    ResearchItemDef { id: 1764, name: "VampireShirt",                  needed:   1 },
    ResearchItemDef { id: 1765, name: "VampirePants",                  needed:   1 },
    ResearchItemDef { id: 1766, name: "WitchHat",                      needed:   1 },
    ResearchItemDef { id: 1767, name: "LeprechaunHat",                 needed:   1 },
    ResearchItemDef { id: 1768, name: "LeprechaunShirt",               needed:   1 },
    ResearchItemDef { id: 1769, name: "LeprechaunPants",               needed:   1 },
    ResearchItemDef { id: 1770, name: "PixieShirt",                    needed:   1 },
    ResearchItemDef { id: 1771, name: "PixiePants",                    needed:   1 },
    ResearchItemDef { id: 1772, name: "PrincessHat",                   needed:   1 },
    ResearchItemDef { id: 1773, name: "PrincessDressNew",              needed:   1 },
    ResearchItemDef { id: 1774, name: "GoodieBag",                     needed:   3 },
    ResearchItemDef { id: 1775, name: "WitchDress",                    needed:   1 },
    ResearchItemDef { id: 1776, name: "WitchBoots",                    needed:   1 },
    ResearchItemDef { id: 1777, name: "BrideofFrankensteinMask",       needed:   1 },
    ResearchItemDef { id: 1778, name: "BrideofFrankensteinDress",      needed:   1 },
    ResearchItemDef { id: 1779, name: "KarateTortoiseMask",            needed:   1 },
    ResearchItemDef { id: 1780, name: "KarateTortoiseShirt",           needed:   1 },
    ResearchItemDef { id: 1781, name: "KarateTortoisePants",           needed:   1 },
    ResearchItemDef { id: 1782, name: "CandyCornRifle",                needed:   1 },
    ResearchItemDef { id: 1783, name: "CandyCorn",                     needed:  99 },
    ResearchItemDef { id: 1784, name: "JackOLanternLauncher",          needed:   1 },
    ResearchItemDef { id: 1785, name: "ExplosiveJackOLantern",         needed:  99 },
    ResearchItemDef { id: 1786, name: "Sickle",                        needed:   1 },
    ResearchItemDef { id: 1787, name: "PumpkinPie",                    needed:   5 },
    ResearchItemDef { id: 1788, name: "ScarecrowHat",                  needed:   1 },
    ResearchItemDef { id: 1789, name: "ScarecrowShirt",                needed:   1 },
    ResearchItemDef { id: 1790, name: "ScarecrowPants",                needed:   1 },
    ResearchItemDef { id: 1791, name: "Cauldron",                      needed:   1 },
    ResearchItemDef { id: 1792, name: "PumpkinChair",                  needed:   1 },
    ResearchItemDef { id: 1793, name: "PumpkinDoor",                   needed:   1 },
    ResearchItemDef { id: 1794, name: "PumpkinTable",                  needed:   1 },
    ResearchItemDef { id: 1795, name: "PumpkinWorkBench",              needed:   1 },
    ResearchItemDef { id: 1796, name: "PumpkinPlatform",               needed: 200 },
    ResearchItemDef { id: 1797, name: "TatteredFairyWings",            needed:   1 },
    ResearchItemDef { id: 1798, name: "SpiderEgg",                     needed:   1 },
    ResearchItemDef { id: 1799, name: "MagicalPumpkinSeed",            needed:   1 },
    ResearchItemDef { id: 1800, name: "BatHook",                       needed:   1 },
    ResearchItemDef { id: 1801, name: "BatScepter",                    needed:   1 },
    ResearchItemDef { id: 1802, name: "RavenStaff",                    needed:   1 },
    ResearchItemDef { id: 1803, name: "JungleKeyMold",                 needed:   1 },
    ResearchItemDef { id: 1804, name: "CorruptionKeyMold",             needed:   1 },
    ResearchItemDef { id: 1805, name: "CrimsonKeyMold",                needed:   1 },
    ResearchItemDef { id: 1806, name: "HallowedKeyMold",               needed:   1 },
    ResearchItemDef { id: 1807, name: "FrozenKeyMold",                 needed:   1 },
    ResearchItemDef { id: 1808, name: "HangingJackOLantern",           needed:   1 },
    ResearchItemDef { id: 1809, name: "RottenEgg",                     needed:  99 },
    ResearchItemDef { id: 1810, name: "UnluckyYarn",                   needed:   1 },
    ResearchItemDef { id: 1811, name: "BlackFairyDust",                needed:   1 },
    ResearchItemDef { id: 1812, name: "Jackelier",                     needed:   1 },
    ResearchItemDef { id: 1813, name: "JackOLantern",                  needed:   1 },
    ResearchItemDef { id: 1814, name: "SpookyChair",                   needed:   1 },
    ResearchItemDef { id: 1815, name: "SpookyDoor",                    needed:   1 },
    ResearchItemDef { id: 1816, name: "SpookyTable",                   needed:   1 },
    ResearchItemDef { id: 1817, name: "SpookyWorkBench",               needed:   1 },
    ResearchItemDef { id: 1818, name: "SpookyPlatform",                needed: 200 },
    ResearchItemDef { id: 1819, name: "ReaperHood",                    needed:   1 },
    ResearchItemDef { id: 1820, name: "ReaperRobe",                    needed:   1 },
    ResearchItemDef { id: 1821, name: "FoxMask",                       needed:   1 },
    ResearchItemDef { id: 1822, name: "FoxShirt",                      needed:   1 },
    ResearchItemDef { id: 1823, name: "FoxPants",                      needed:   1 },
    ResearchItemDef { id: 1824, name: "CatEars",                       needed:   1 },
    ResearchItemDef { id: 1825, name: "BloodyMachete",                 needed:   1 },
    ResearchItemDef { id: 1826, name: "TheHorsemansBlade",             needed:   1 },
    ResearchItemDef { id: 1827, name: "BladedGlove",                   needed:   1 },
    ResearchItemDef { id: 1828, name: "PumpkinSeed",                   needed:  25 },
    ResearchItemDef { id: 1829, name: "SpookyHook",                    needed:   1 },
    ResearchItemDef { id: 1830, name: "SpookyWings",                   needed:   1 },
    ResearchItemDef { id: 1831, name: "SpookyTwig",                    needed:   3 },
    ResearchItemDef { id: 1832, name: "SpookyHelmet",                  needed:   1 },
    ResearchItemDef { id: 1833, name: "SpookyBreastplate",             needed:   1 },
    ResearchItemDef { id: 1834, name: "SpookyLeggings",                needed:   1 },
    ResearchItemDef { id: 1835, name: "StakeLauncher",                 needed:   1 },
    ResearchItemDef { id: 1836, name: "Stake",                         needed:  99 },
    ResearchItemDef { id: 1837, name: "CursedSapling",                 needed:   1 },
    ResearchItemDef { id: 1838, name: "SpaceCreatureMask",             needed:   1 },
    ResearchItemDef { id: 1839, name: "SpaceCreatureShirt",            needed:   1 },
    ResearchItemDef { id: 1840, name: "SpaceCreaturePants",            needed:   1 },
    ResearchItemDef { id: 1841, name: "WolfMask",                      needed:   1 },
    ResearchItemDef { id: 1842, name: "WolfShirt",                     needed:   1 },
    ResearchItemDef { id: 1843, name: "WolfPants",                     needed:   1 },
    ResearchItemDef { id: 1844, name: "PumpkinMoonMedallion",          needed:   3 },
    ResearchItemDef { id: 1845, name: "NecromanticScroll",             needed:   1 },
    ResearchItemDef { id: 1846, name: "JackingSkeletron",              needed:   1 },
    ResearchItemDef { id: 1847, name: "BitterHarvest",                 needed:   1 },
    ResearchItemDef { id: 1848, name: "BloodMoonCountess",             needed:   1 },
    ResearchItemDef { id: 1849, name: "HallowsEve",                    needed:   1 },
    ResearchItemDef { id: 1850, name: "MorbidCuriosity",               needed:   1 },
    ResearchItemDef { id: 1851, name: "TreasureHunterShirt",           needed:   1 },
    ResearchItemDef { id: 1852, name: "TreasureHunterPants",           needed:   1 },
    ResearchItemDef { id: 1853, name: "DryadCoverings",                needed:   1 },
    ResearchItemDef { id: 1854, name: "DryadLoincloth",                needed:   1 },
    ResearchItemDef { id: 1855, name: "MourningWoodTrophy",            needed:   1 },
    ResearchItemDef { id: 1856, name: "PumpkingTrophy",                needed:   1 },
    ResearchItemDef { id: 1857, name: "JackOLanternMask",              needed:   1 },
    ResearchItemDef { id: 1858, name: "SniperScope",                   needed:   1 },
    ResearchItemDef { id: 1859, name: "HeartLantern",                  needed:   1 },
    ResearchItemDef { id: 1860, name: "JellyfishDivingGear",           needed:   1 },
    ResearchItemDef { id: 1861, name: "ArcticDivingGear",              needed:   1 },
    ResearchItemDef { id: 1862, name: "FrostsparkBoots",               needed:   1 },
    ResearchItemDef { id: 1863, name: "FartInABalloon",                needed:   1 },
    ResearchItemDef { id: 1864, name: "PapyrusScarab",                 needed:   1 },
    ResearchItemDef { id: 1865, name: "CelestialStone",                needed:   1 },
    ResearchItemDef { id: 1866, name: "Hoverboard",                    needed:   1 },
    ResearchItemDef { id: 1869, name: "Present",                       needed:   3 },
    ResearchItemDef { id: 1870, name: "RedRyder",                      needed:   1 },
    ResearchItemDef { id: 1871, name: "FestiveWings",                  needed:   1 },
    ResearchItemDef { id: 1872, name: "PineTreeBlock",                 needed: 100 },
    ResearchItemDef { id: 1873, name: "ChristmasTree",                 needed:   1 },
    ResearchItemDef { id: 1874, name: "StarTopper1",                   needed:   1 },
    ResearchItemDef { id: 1875, name: "StarTopper2",                   needed:   1 },
    ResearchItemDef { id: 1876, name: "StarTopper3",                   needed:   1 },
    ResearchItemDef { id: 1877, name: "BowTopper",                     needed:   1 },
    ResearchItemDef { id: 1878, name: "WhiteGarland",                  needed:   1 },
    ResearchItemDef { id: 1879, name: "WhiteAndRedGarland",            needed:   1 },
    ResearchItemDef { id: 1880, name: "RedGardland",                   needed:   1 },
    ResearchItemDef { id: 1881, name: "RedAndGreenGardland",           needed:   1 },
    ResearchItemDef { id: 1882, name: "GreenGardland",                 needed:   1 },
    ResearchItemDef { id: 1883, name: "GreenAndWhiteGarland",          needed:   1 },
    ResearchItemDef { id: 1884, name: "MulticoloredBulb",              needed:   1 },
    ResearchItemDef { id: 1885, name: "RedBulb",                       needed:   1 },
    ResearchItemDef { id: 1886, name: "YellowBulb",                    needed:   1 },
    ResearchItemDef { id: 1887, name: "GreenBulb",                     needed:   1 },
    ResearchItemDef { id: 1888, name: "RedAndGreenBulb",               needed:   1 },
    ResearchItemDef { id: 1889, name: "YellowAndGreenBulb",            needed:   1 },
    ResearchItemDef { id: 1890, name: "RedAndYellowBulb",              needed:   1 },
    ResearchItemDef { id: 1891, name: "WhiteBulb",                     needed:   1 },
    ResearchItemDef { id: 1892, name: "WhiteAndRedBulb",               needed:   1 },
    ResearchItemDef { id: 1893, name: "WhiteAndYellowBulb",            needed:   1 },
    ResearchItemDef { id: 1894, name: "WhiteAndGreenBulb",             needed:   1 },
    ResearchItemDef { id: 1895, name: "MulticoloredLights",            needed:   1 },
    ResearchItemDef { id: 1896, name: "RedLights",                     needed:   1 },
    ResearchItemDef { id: 1897, name: "GreenLights",                   needed:   1 },
    ResearchItemDef { id: 1898, name: "BlueLights",                    needed:   1 },
    ResearchItemDef { id: 1899, name: "YellowLights",                  needed:   1 },
    ResearchItemDef { id: 1900, name: "RedAndYellowLights",            needed:   1 },
    ResearchItemDef { id: 1901, name: "RedAndGreenLights",             needed:   1 },
    ResearchItemDef { id: 1902, name: "YellowAndGreenLights",          needed:   1 },
    ResearchItemDef { id: 1903, name: "BlueAndGreenLights",            needed:   1 },
    ResearchItemDef { id: 1904, name: "RedAndBlueLights",              needed:   1 },
    ResearchItemDef { id: 1905, name: "BlueAndYellowLights",           needed:   1 },
    ResearchItemDef { id: 1906, name: "GiantBow",                      needed:   1 },
    ResearchItemDef { id: 1907, name: "ReindeerAntlers",               needed:   1 },
    ResearchItemDef { id: 1908, name: "Holly",                         needed:   1 },
    ResearchItemDef { id: 1909, name: "CandyCaneSword",                needed:   1 },
    ResearchItemDef { id: 1910, name: "EldMelter",                     needed:   1 },
    ResearchItemDef { id: 1911, name: "ChristmasPudding",              needed:   5 },
    ResearchItemDef { id: 1912, name: "Eggnog",                        needed:   5 },
    ResearchItemDef { id: 1913, name: "StarAnise",                     needed:  99 },
    ResearchItemDef { id: 1914, name: "ReindeerBells",                 needed:   1 },
    ResearchItemDef { id: 1915, name: "CandyCaneHook",                 needed:   1 },
    ResearchItemDef { id: 1916, name: "ChristmasHook",                 needed:   1 },
    ResearchItemDef { id: 1917, name: "CnadyCanePickaxe",              needed:   1 },
    ResearchItemDef { id: 1918, name: "FruitcakeChakram",              needed:   1 },
    ResearchItemDef { id: 1919, name: "SugarCookie",                   needed:   5 },
    ResearchItemDef { id: 1920, name: "GingerbreadCookie",             needed:   5 },
    ResearchItemDef { id: 1921, name: "HandWarmer",                    needed:   1 },
    ResearchItemDef { id: 1922, name: "Coal",                          needed:   1 },
    ResearchItemDef { id: 1923, name: "Toolbox",                       needed:   1 },
    ResearchItemDef { id: 1924, name: "PineDoor",                      needed:   1 },
    ResearchItemDef { id: 1925, name: "PineChair",                     needed:   1 },
    ResearchItemDef { id: 1926, name: "PineTable",                     needed:   1 },
    ResearchItemDef { id: 1927, name: "DogWhistle",                    needed:   1 },
    ResearchItemDef { id: 1928, name: "ChristmasTreeSword",            needed:   1 },
    ResearchItemDef { id: 1929, name: "ChainGun",                      needed:   1 },
    ResearchItemDef { id: 1930, name: "Razorpine",                     needed:   1 },
    ResearchItemDef { id: 1931, name: "BlizzardStaff",                 needed:   1 },
    ResearchItemDef { id: 1932, name: "MrsClauseHat",                  needed:   1 },
    ResearchItemDef { id: 1933, name: "MrsClauseShirt",                needed:   1 },
    ResearchItemDef { id: 1934, name: "MrsClauseHeels",                needed:   1 },
    ResearchItemDef { id: 1935, name: "ParkaHood",                     needed:   1 },
    ResearchItemDef { id: 1936, name: "ParkaCoat",                     needed:   1 },
    ResearchItemDef { id: 1937, name: "ParkaPants",                    needed:   1 },
    ResearchItemDef { id: 1938, name: "SnowHat",                       needed:   1 },
    ResearchItemDef { id: 1939, name: "UglySweater",                   needed:   1 },
    ResearchItemDef { id: 1940, name: "TreeMask",                      needed:   1 },
    ResearchItemDef { id: 1941, name: "TreeShirt",                     needed:   1 },
    ResearchItemDef { id: 1942, name: "TreeTrunks",                    needed:   1 },
    ResearchItemDef { id: 1943, name: "ElfHat",                        needed:   1 },
    ResearchItemDef { id: 1944, name: "ElfShirt",                      needed:   1 },
    ResearchItemDef { id: 1945, name: "ElfPants",                      needed:   1 },
    ResearchItemDef { id: 1946, name: "SnowmanCannon",                 needed:   1 },
    ResearchItemDef { id: 1947, name: "NorthPole",                     needed:   1 },
    ResearchItemDef { id: 1948, name: "ChristmasTreeWallpaper",        needed: 400 },
    ResearchItemDef { id: 1949, name: "OrnamentWallpaper",             needed: 400 },
    ResearchItemDef { id: 1950, name: "CandyCaneWallpaper",            needed: 400 },
    ResearchItemDef { id: 1951, name: "FestiveWallpaper",              needed: 400 },
    ResearchItemDef { id: 1952, name: "StarsWallpaper",                needed: 400 },
    ResearchItemDef { id: 1953, name: "SquigglesWallpaper",            needed: 400 },
    ResearchItemDef { id: 1954, name: "SnowflakeWallpaper",            needed: 400 },
    ResearchItemDef { id: 1955, name: "KrampusHornWallpaper",          needed: 400 },
    ResearchItemDef { id: 1956, name: "BluegreenWallpaper",            needed: 400 },
    ResearchItemDef { id: 1957, name: "GrinchFingerWallpaper",         needed: 400 },
    ResearchItemDef { id: 1958, name: "NaughtyPresent",                needed:   3 },
    ResearchItemDef { id: 1959, name: "BabyGrinchMischiefWhistle",     needed:   1 },
    ResearchItemDef { id: 1960, name: "IceQueenTrophy",                needed:   1 },
    ResearchItemDef { id: 1961, name: "SantaNK1Trophy",                needed:   1 },
    ResearchItemDef { id: 1962, name: "EverscreamTrophy",              needed:   1 },
    ResearchItemDef { id: 1963, name: "MusicBoxPumpkinMoon",           needed:   1 },
    ResearchItemDef { id: 1964, name: "MusicBoxAltUnderground",        needed:   1 },
    ResearchItemDef { id: 1965, name: "MusicBoxFrostMoon",             needed:   1 },
    ResearchItemDef { id: 1966, name: "BrownPaint",                    needed:  25 },
    ResearchItemDef { id: 1967, name: "ShadowPaint",                   needed:  25 },
    ResearchItemDef { id: 1968, name: "NegativePaint",                 needed:  25 },
    ResearchItemDef { id: 1969, name: "TeamDye",                       needed:   3 },
    ResearchItemDef { id: 1970, name: "AmethystGemsparkBlock",         needed: 100 },
    ResearchItemDef { id: 1971, name: "TopazGemsparkBlock",            needed: 100 },
    ResearchItemDef { id: 1972, name: "SapphireGemsparkBlock",         needed: 100 },
    ResearchItemDef { id: 1973, name: "EmeraldGemsparkBlock",          needed: 100 },
    ResearchItemDef { id: 1974, name: "RubyGemsparkBlock",             needed: 100 },
    ResearchItemDef { id: 1975, name: "DiamondGemsparkBlock",          needed: 100 },
    ResearchItemDef { id: 1976, name: "AmberGemsparkBlock",            needed: 100 },
    ResearchItemDef { id: 1977, name: "LifeHairDye",                   needed:   3 },
    ResearchItemDef { id: 1978, name: "ManaHairDye",                   needed:   3 },
    ResearchItemDef { id: 1979, name: "DepthHairDye",                  needed:   3 },
    ResearchItemDef { id: 1980, name: "MoneyHairDye",                  needed:   3 },
    ResearchItemDef { id: 1981, name: "TimeHairDye",                   needed:   3 },
    ResearchItemDef { id: 1982, name: "TeamHairDye",                   needed:   3 },
    ResearchItemDef { id: 1983, name: "BiomeHairDye",                  needed:   3 },
    ResearchItemDef { id: 1984, name: "PartyHairDye",                  needed:   3 },
    ResearchItemDef { id: 1985, name: "RainbowHairDye",                needed:   3 },
    ResearchItemDef { id: 1986, name: "SpeedHairDye",                  needed:   3 },
    ResearchItemDef { id: 1987, name: "AngelHalo",                     needed:   1 },
    ResearchItemDef { id: 1988, name: "Fez",                           needed:   1 },
    ResearchItemDef { id: 1989, name: "Womannquin",                    needed:   1 },
    ResearchItemDef { id: 1990, name: "HairDyeRemover",                needed:   1 },
    ResearchItemDef { id: 1991, name: "BugNet",                        needed:   1 },
    ResearchItemDef { id: 1992, name: "Firefly",                       needed:   5 },
    ResearchItemDef { id: 1993, name: "FireflyinaBottle",              needed:   1 },
    ResearchItemDef { id: 1994, name: "MonarchButterfly",              needed:   5 },
    ResearchItemDef { id: 1995, name: "PurpleEmperorButterfly",        needed:   5 },
    ResearchItemDef { id: 1996, name: "RedAdmiralButterfly",           needed:   5 },
    ResearchItemDef { id: 1997, name: "UlyssesButterfly",              needed:   5 },
    ResearchItemDef { id: 1998, name: "SulphurButterfly",              needed:   5 },
    ResearchItemDef { id: 1999, name: "TreeNymphButterfly",            needed:   5 },
    ResearchItemDef { id: 2000, name: "ZebraSwallowtailButterfly",     needed:   5 },
    ResearchItemDef { id: 2001, name: "JuliaButterfly",                needed:   5 },
    ResearchItemDef { id: 2002, name: "Worm",                          needed:   5 },
    ResearchItemDef { id: 2003, name: "Mouse",                         needed:   5 },
    ResearchItemDef { id: 2004, name: "LightningBug",                  needed:   5 },
    ResearchItemDef { id: 2005, name: "LightningBuginaBottle",         needed:   1 },
    ResearchItemDef { id: 2006, name: "Snail",                         needed:   5 },
    ResearchItemDef { id: 2007, name: "GlowingSnail",                  needed:   5 },
    ResearchItemDef { id: 2008, name: "FancyGreyWallpaper",            needed: 400 },
    ResearchItemDef { id: 2009, name: "IceFloeWallpaper",              needed: 400 },
    ResearchItemDef { id: 2010, name: "MusicWallpaper",                needed: 400 },
    ResearchItemDef { id: 2011, name: "PurpleRainWallpaper",           needed: 400 },
    ResearchItemDef { id: 2012, name: "RainbowWallpaper",              needed: 400 },
    ResearchItemDef { id: 2013, name: "SparkleStoneWallpaper",         needed: 400 },
    ResearchItemDef { id: 2014, name: "StarlitHeavenWallpaper",        needed: 400 },
    ResearchItemDef { id: 2015, name: "Bird",                          needed:   5 },
    ResearchItemDef { id: 2016, name: "BlueJay",                       needed:   5 },
    ResearchItemDef { id: 2017, name: "Cardinal",                      needed:   5 },
    ResearchItemDef { id: 2018, name: "Squirrel",                      needed:   5 },
    ResearchItemDef { id: 2019, name: "Bunny",                         needed:   5 },
    ResearchItemDef { id: 2020, name: "CactusBookcase",                needed:   1 },
    ResearchItemDef { id: 2021, name: "EbonwoodBookcase",              needed:   1 },
    ResearchItemDef { id: 2022, name: "FleshBookcase",                 needed:   1 },
    ResearchItemDef { id: 2023, name: "HoneyBookcase",                 needed:   1 },
    ResearchItemDef { id: 2024, name: "SteampunkBookcase",             needed:   1 },
    ResearchItemDef { id: 2025, name: "GlassBookcase",                 needed:   1 },
    ResearchItemDef { id: 2026, name: "RichMahoganyBookcase",          needed:   1 },
    ResearchItemDef { id: 2027, name: "PearlwoodBookcase",             needed:   1 },
    ResearchItemDef { id: 2028, name: "SpookyBookcase",                needed:   1 },
    ResearchItemDef { id: 2029, name: "SkywareBookcase",               needed:   1 },
    ResearchItemDef { id: 2030, name: "LihzahrdBookcase",              needed:   1 },
    ResearchItemDef { id: 2031, name: "FrozenBookcase",                needed:   1 },
    ResearchItemDef { id: 2032, name: "CactusLantern",                 needed:   1 },
    ResearchItemDef { id: 2033, name: "EbonwoodLantern",               needed:   1 },
    ResearchItemDef { id: 2034, name: "FleshLantern",                  needed:   1 },
    ResearchItemDef { id: 2035, name: "HoneyLantern",                  needed:   1 },
    ResearchItemDef { id: 2036, name: "SteampunkLantern",              needed:   1 },
    ResearchItemDef { id: 2037, name: "GlassLantern",                  needed:   1 },
    ResearchItemDef { id: 2038, name: "RichMahoganyLantern",           needed:   1 },
    ResearchItemDef { id: 2039, name: "PearlwoodLantern",              needed:   1 },
    ResearchItemDef { id: 2040, name: "FrozenLantern",                 needed:   1 },
    ResearchItemDef { id: 2041, name: "LihzahrdLantern",               needed:   1 },
    ResearchItemDef { id: 2042, name: "SkywareLantern",                needed:   1 },
    ResearchItemDef { id: 2043, name: "SpookyLantern",                 needed:   1 },
    ResearchItemDef { id: 2044, name: "FrozenDoor",                    needed:   1 },
    ResearchItemDef { id: 2045, name: "CactusCandle",                  needed:   1 },
    ResearchItemDef { id: 2046, name: "EbonwoodCandle",                needed:   1 },
    ResearchItemDef { id: 2047, name: "FleshCandle",                   needed:   1 },
    ResearchItemDef { id: 2048, name: "GlassCandle",                   needed:   1 },
    ResearchItemDef { id: 2049, name: "FrozenCandle",                  needed:   1 },
    ResearchItemDef { id: 2050, name: "RichMahoganyCandle",            needed:   1 },
    ResearchItemDef { id: 2051, name: "PearlwoodCandle",               needed:   1 },
    ResearchItemDef { id: 2052, name: "LihzahrdCandle",                needed:   1 },
    ResearchItemDef { id: 2053, name: "SkywareCandle",                 needed:   1 },
    ResearchItemDef { id: 2054, name: "PumpkinCandle",                 needed:   1 },
    ResearchItemDef { id: 2055, name: "CactusChandelier",              needed:   1 },
    ResearchItemDef { id: 2056, name: "EbonwoodChandelier",            needed:   1 },
    ResearchItemDef { id: 2057, name: "FleshChandelier",               needed:   1 },
    ResearchItemDef { id: 2058, name: "HoneyChandelier",               needed:   1 },
    ResearchItemDef { id: 2059, name: "FrozenChandelier",              needed:   1 },
    ResearchItemDef { id: 2060, name: "RichMahoganyChandelier",        needed:   1 },
    ResearchItemDef { id: 2061, name: "PearlwoodChandelier",           needed:   1 },
    ResearchItemDef { id: 2062, name: "LihzahrdChandelier",            needed:   1 },
    ResearchItemDef { id: 2063, name: "SkywareChandelier",             needed:   1 },
    ResearchItemDef { id: 2064, name: "SpookyChandelier",              needed:   1 },
    ResearchItemDef { id: 2065, name: "GlassChandelier",               needed:   1 },
    ResearchItemDef { id: 2066, name: "CactusBed",                     needed:   1 },
    ResearchItemDef { id: 2067, name: "FleshBed",                      needed:   1 },
    ResearchItemDef { id: 2068, name: "FrozenBed",                     needed:   1 },
    ResearchItemDef { id: 2069, name: "LihzahrdBed",                   needed:   1 },
    ResearchItemDef { id: 2070, name: "SkywareBed",                    needed:   1 },
    ResearchItemDef { id: 2071, name: "SpookyBed",                     needed:   1 },
    ResearchItemDef { id: 2072, name: "CactusBathtub",                 needed:   1 },
    ResearchItemDef { id: 2073, name: "EbonwoodBathtub",               needed:   1 },
    ResearchItemDef { id: 2074, name: "FleshBathtub",                  needed:   1 },
    ResearchItemDef { id: 2075, name: "GlassBathtub",                  needed:   1 },
    ResearchItemDef { id: 2076, name: "FrozenBathtub",                 needed:   1 },
    ResearchItemDef { id: 2077, name: "RichMahoganyBathtub",           needed:   1 },
    ResearchItemDef { id: 2078, name: "PearlwoodBathtub",              needed:   1 },
    ResearchItemDef { id: 2079, name: "LihzahrdBathtub",               needed:   1 },
    ResearchItemDef { id: 2080, name: "SkywareBathtub",                needed:   1 },
    ResearchItemDef { id: 2081, name: "SpookyBathtub",                 needed:   1 },
    ResearchItemDef { id: 2082, name: "CactusLamp",                    needed:   1 },
    ResearchItemDef { id: 2083, name: "EbonwoodLamp",                  needed:   1 },
    ResearchItemDef { id: 2084, name: "FleshLamp",                     needed:   1 },
    ResearchItemDef { id: 2085, name: "GlassLamp",                     needed:   1 },
    ResearchItemDef { id: 2086, name: "FrozenLamp",                    needed:   1 },
    ResearchItemDef { id: 2087, name: "RichMahoganyLamp",              needed:   1 },
    ResearchItemDef { id: 2088, name: "PearlwoodLamp",                 needed:   1 },
    ResearchItemDef { id: 2089, name: "LihzahrdLamp",                  needed:   1 },
    ResearchItemDef { id: 2090, name: "SkywareLamp",                   needed:   1 },
    ResearchItemDef { id: 2091, name: "SpookyLamp",                    needed:   1 },
    ResearchItemDef { id: 2092, name: "CactusCandelabra",              needed:   1 },
    ResearchItemDef { id: 2093, name: "EbonwoodCandelabra",            needed:   1 },
    ResearchItemDef { id: 2094, name: "FleshCandelabra",               needed:   1 },
    ResearchItemDef { id: 2095, name: "HoneyCandelabra",               needed:   1 },
    ResearchItemDef { id: 2096, name: "SteampunkCandelabra",           needed:   1 },
    ResearchItemDef { id: 2097, name: "GlassCandelabra",               needed:   1 },
    ResearchItemDef { id: 2098, name: "RichMahoganyCandelabra",        needed:   1 },
    ResearchItemDef { id: 2099, name: "PearlwoodCandelabra",           needed:   1 },
    ResearchItemDef { id: 2100, name: "FrozenCandelabra",              needed:   1 },
    ResearchItemDef { id: 2101, name: "LihzahrdCandelabra",            needed:   1 },
    ResearchItemDef { id: 2102, name: "SkywareCandelabra",             needed:   1 },
    ResearchItemDef { id: 2103, name: "SpookyCandelabra",              needed:   1 },
    ResearchItemDef { id: 2104, name: "BrainMask",                     needed:   1 },
    ResearchItemDef { id: 2105, name: "FleshMask",                     needed:   1 },
    ResearchItemDef { id: 2106, name: "TwinMask",                      needed:   1 },
    ResearchItemDef { id: 2107, name: "SkeletronPrimeMask",            needed:   1 },
    ResearchItemDef { id: 2108, name: "BeeMask",                       needed:   1 },
    ResearchItemDef { id: 2109, name: "PlanteraMask",                  needed:   1 },
    ResearchItemDef { id: 2110, name: "GolemMask",                     needed:   1 },
    ResearchItemDef { id: 2111, name: "EaterMask",                     needed:   1 },
    ResearchItemDef { id: 2112, name: "EyeMask",                       needed:   1 },
    ResearchItemDef { id: 2113, name: "DestroyerMask",                 needed:   1 },
    ResearchItemDef { id: 2114, name: "BlacksmithRack",                needed:   1 },
    ResearchItemDef { id: 2115, name: "CarpentryRack",                 needed:   1 },
    ResearchItemDef { id: 2116, name: "HelmetRack",                    needed:   1 },
    ResearchItemDef { id: 2117, name: "SpearRack",                     needed:   1 },
    ResearchItemDef { id: 2118, name: "SwordRack",                     needed:   1 },
    ResearchItemDef { id: 2119, name: "StoneSlab",                     needed: 100 },
    ResearchItemDef { id: 2120, name: "SandstoneSlab",                 needed: 100 },
    ResearchItemDef { id: 2121, name: "Frog",                          needed:   5 },
    ResearchItemDef { id: 2122, name: "MallardDuck",                   needed:   5 },
    ResearchItemDef { id: 2123, name: "Duck",                          needed:   5 },
    ResearchItemDef { id: 2124, name: "HoneyBathtub",                  needed:   1 },
    ResearchItemDef { id: 2125, name: "SteampunkBathtub",              needed:   1 },
    ResearchItemDef { id: 2126, name: "LivingWoodBathtub",             needed:   1 },
    ResearchItemDef { id: 2127, name: "ShadewoodBathtub",              needed:   1 },
    ResearchItemDef { id: 2128, name: "BoneBathtub",                   needed:   1 },
    ResearchItemDef { id: 2129, name: "HoneyLamp",                     needed:   1 },
    ResearchItemDef { id: 2130, name: "SteampunkLamp",                 needed:   1 },
    ResearchItemDef { id: 2131, name: "LivingWoodLamp",                needed:   1 },
    ResearchItemDef { id: 2132, name: "ShadewoodLamp",                 needed:   1 },
    ResearchItemDef { id: 2133, name: "GoldenLamp",                    needed:   1 },
    ResearchItemDef { id: 2134, name: "BoneLamp",                      needed:   1 },
    ResearchItemDef { id: 2135, name: "LivingWoodBookcase",            needed:   1 },
    ResearchItemDef { id: 2136, name: "ShadewoodBookcase",             needed:   1 },
    ResearchItemDef { id: 2137, name: "GoldenBookcase",                needed:   1 },
    ResearchItemDef { id: 2138, name: "BoneBookcase",                  needed:   1 },
    ResearchItemDef { id: 2139, name: "LivingWoodBed",                 needed:   1 },
    ResearchItemDef { id: 2140, name: "BoneBed",                       needed:   1 },
    ResearchItemDef { id: 2141, name: "LivingWoodChandelier",          needed:   1 },
    ResearchItemDef { id: 2142, name: "ShadewoodChandelier",           needed:   1 },
    ResearchItemDef { id: 2143, name: "GoldenChandelier",              needed:   1 },
    ResearchItemDef { id: 2144, name: "BoneChandelier",                needed:   1 },
    ResearchItemDef { id: 2145, name: "LivingWoodLantern",             needed:   1 },
    ResearchItemDef { id: 2146, name: "ShadewoodLantern",              needed:   1 },
    ResearchItemDef { id: 2147, name: "GoldenLantern",                 needed:   1 },
    ResearchItemDef { id: 2148, name: "BoneLantern",                   needed:   1 },
    ResearchItemDef { id: 2149, name: "LivingWoodCandelabra",          needed:   1 },
    ResearchItemDef { id: 2150, name: "ShadewoodCandelabra",           needed:   1 },
    ResearchItemDef { id: 2151, name: "GoldenCandelabra",              needed:   1 },
    ResearchItemDef { id: 2152, name: "BoneCandelabra",                needed:   1 },
    ResearchItemDef { id: 2153, name: "LivingWoodCandle",              needed:   1 },
    ResearchItemDef { id: 2154, name: "ShadewoodCandle",               needed:   1 },
    ResearchItemDef { id: 2155, name: "GoldenCandle",                  needed:   1 },
    ResearchItemDef { id: 2156, name: "BlackScorpion",                 needed:   5 },
    ResearchItemDef { id: 2157, name: "Scorpion",                      needed:   5 },
    ResearchItemDef { id: 2158, name: "BubbleWallpaper",               needed: 400 },
    ResearchItemDef { id: 2159, name: "CopperPipeWallpaper",           needed: 400 },
    ResearchItemDef { id: 2160, name: "DuckyWallpaper",                needed: 400 },
    ResearchItemDef { id: 2161, name: "FrostCore",                     needed:   3 },
    ResearchItemDef { id: 2162, name: "BunnyCage",                     needed:   1 },
    ResearchItemDef { id: 2163, name: "SquirrelCage",                  needed:   1 },
    ResearchItemDef { id: 2164, name: "MallardDuckCage",               needed:   1 },
    ResearchItemDef { id: 2165, name: "DuckCage",                      needed:   1 },
    ResearchItemDef { id: 2166, name: "BirdCage",                      needed:   1 },
    ResearchItemDef { id: 2167, name: "BlueJayCage",                   needed:   1 },
    ResearchItemDef { id: 2168, name: "CardinalCage",                  needed:   1 },
    ResearchItemDef { id: 2169, name: "WaterfallWall",                 needed: 400 },
    ResearchItemDef { id: 2170, name: "LavafallWall",                  needed: 400 },
    ResearchItemDef { id: 2171, name: "CrimsonSeeds",                  needed:  25 },
    ResearchItemDef { id: 2172, name: "HeavyWorkBench",                needed:   1 },
    ResearchItemDef { id: 2173, name: "CopperPlating",                 needed: 100 },
    ResearchItemDef { id: 2174, name: "SnailCage",                     needed:   1 },
    ResearchItemDef { id: 2175, name: "GlowingSnailCage",              needed:   1 },
    ResearchItemDef { id: 2176, name: "ShroomiteDiggingClaw",          needed:   1 },
    ResearchItemDef { id: 2177, name: "AmmoBox",                       needed:   1 },
    ResearchItemDef { id: 2178, name: "MonarchButterflyJar",           needed:   1 },
    ResearchItemDef { id: 2179, name: "PurpleEmperorButterflyJar",     needed:   1 },
    ResearchItemDef { id: 2180, name: "RedAdmiralButterflyJar",        needed:   1 },
    ResearchItemDef { id: 2181, name: "UlyssesButterflyJar",           needed:   1 },
    ResearchItemDef { id: 2182, name: "SulphurButterflyJar",           needed:   1 },
    ResearchItemDef { id: 2183, name: "TreeNymphButterflyJar",         needed:   1 },
    ResearchItemDef { id: 2184, name: "ZebraSwallowtailButterflyJar",  needed:   1 },
    ResearchItemDef { id: 2185, name: "JuliaButterflyJar",             needed:   1 },
    ResearchItemDef { id: 2186, name: "ScorpionCage",                  needed:   1 },
    ResearchItemDef { id: 2187, name: "BlackScorpionCage",             needed:   1 },
    ResearchItemDef { id: 2188, name: "VenomStaff",                    needed:   1 },
    ResearchItemDef { id: 2189, name: "SpectreMask",                   needed:   1 },
    ResearchItemDef { id: 2190, name: "FrogCage",                      needed:   1 },
    ResearchItemDef { id: 2191, name: "MouseCage",                     needed:   1 },
    ResearchItemDef { id: 2192, name: "BoneWelder",                    needed:   1 },
    ResearchItemDef { id: 2193, name: "FleshCloningVaat",              needed:   1 },
    ResearchItemDef { id: 2194, name: "GlassKiln",                     needed:   1 },
    ResearchItemDef { id: 2195, name: "LihzahrdFurnace",               needed:   1 },
    ResearchItemDef { id: 2196, name: "LivingLoom",                    needed:   1 },
    ResearchItemDef { id: 2197, name: "SkyMill",                       needed:   1 },
    ResearchItemDef { id: 2198, name: "IceMachine",                    needed:   1 },
    ResearchItemDef { id: 2199, name: "BeetleHelmet",                  needed:   1 },
    ResearchItemDef { id: 2200, name: "BeetleScaleMail",               needed:   1 },
    ResearchItemDef { id: 2201, name: "BeetleShell",                   needed:   1 },
    ResearchItemDef { id: 2202, name: "BeetleLeggings",                needed:   1 },
    ResearchItemDef { id: 2203, name: "SteampunkBoiler",               needed:   1 },
    ResearchItemDef { id: 2204, name: "HoneyDispenser",                needed:   1 },
    ResearchItemDef { id: 2205, name: "Penguin",                       needed:   5 },
    ResearchItemDef { id: 2206, name: "PenguinCage",                   needed:   1 },
    ResearchItemDef { id: 2207, name: "WormCage",                      needed:   1 },
    ResearchItemDef { id: 2208, name: "Terrarium",                     needed:   1 },
    ResearchItemDef { id: 2209, name: "SuperManaPotion",               needed:  30 },
    ResearchItemDef { id: 2210, name: "EbonwoodFence",                 needed:   1 },
    ResearchItemDef { id: 2211, name: "RichMahoganyFence",             needed:   1 },
    ResearchItemDef { id: 2212, name: "PearlwoodFence",                needed:   1 },
    ResearchItemDef { id: 2213, name: "ShadewoodFence",                needed:   1 },
    ResearchItemDef { id: 2214, name: "BrickLayer",                    needed:   1 },
    ResearchItemDef { id: 2215, name: "ExtendoGrip",                   needed:   1 },
    ResearchItemDef { id: 2216, name: "PaintSprayer",                  needed:   1 },
    ResearchItemDef { id: 2217, name: "PortableCementMixer",           needed:   1 },
    ResearchItemDef { id: 2218, name: "BeetleHusk",                    needed:   3 },
    ResearchItemDef { id: 2219, name: "CelestialMagnet",               needed:   1 },
    ResearchItemDef { id: 2220, name: "CelestialEmblem",               needed:   1 },
    ResearchItemDef { id: 2221, name: "CelestialCuffs",                needed:   1 },
    ResearchItemDef { id: 2222, name: "PeddlersHat",                   needed:   1 },
    ResearchItemDef { id: 2223, name: "PulseBow",                      needed:   1 },
    ResearchItemDef { id: 2224, name: "DynastyChandelier",             needed:   1 },
    ResearchItemDef { id: 2225, name: "DynastyLamp",                   needed:   1 },
    ResearchItemDef { id: 2226, name: "DynastyLantern",                needed:   1 },
    ResearchItemDef { id: 2227, name: "DynastyCandelabra",             needed:   1 },
    ResearchItemDef { id: 2228, name: "DynastyChair",                  needed:   1 },
    ResearchItemDef { id: 2229, name: "DynastyWorkBench",              needed:   1 },
    ResearchItemDef { id: 2230, name: "DynastyChest",                  needed:   1 },
    ResearchItemDef { id: 2231, name: "DynastyBed",                    needed:   1 },
    ResearchItemDef { id: 2232, name: "DynastyBathtub",                needed:   1 },
    ResearchItemDef { id: 2233, name: "DynastyBookcase",               needed:   1 },
    ResearchItemDef { id: 2234, name: "DynastyCup",                    needed:   1 },
    ResearchItemDef { id: 2235, name: "DynastyBowl",                   needed:   1 },
    ResearchItemDef { id: 2236, name: "DynastyCandle",                 needed:   1 },
    ResearchItemDef { id: 2237, name: "DynastyClock",                  needed:   1 },
    ResearchItemDef { id: 2238, name: "GoldenClock",                   needed:   1 },
    ResearchItemDef { id: 2239, name: "GlassClock",                    needed:   1 },
    ResearchItemDef { id: 2240, name: "HoneyClock",                    needed:   1 },
    ResearchItemDef { id: 2241, name: "SteampunkClock",                needed:   1 },
    ResearchItemDef { id: 2242, name: "FancyDishes",                   needed:   1 },
    ResearchItemDef { id: 2243, name: "GlassBowl",                     needed:   1 },
    ResearchItemDef { id: 2244, name: "WineGlass",                     needed:   1 },
    ResearchItemDef { id: 2245, name: "LivingWoodPiano",               needed:   1 },
    ResearchItemDef { id: 2246, name: "FleshPiano",                    needed:   1 },
    ResearchItemDef { id: 2247, name: "FrozenPiano",                   needed:   1 },
    ResearchItemDef { id: 2248, name: "FrozenTable",                   needed:   1 },
    ResearchItemDef { id: 2249, name: "HoneyChest",                    needed:   1 },
    ResearchItemDef { id: 2250, name: "SteampunkChest",                needed:   1 },
    ResearchItemDef { id: 2251, name: "HoneyWorkBench",                needed:   1 },
    ResearchItemDef { id: 2252, name: "FrozenWorkBench",               needed:   1 },
    ResearchItemDef { id: 2253, name: "SteampunkWorkBench",            needed:   1 },
    ResearchItemDef { id: 2254, name: "GlassPiano",                    needed:   1 },
    ResearchItemDef { id: 2255, name: "HoneyPiano",                    needed:   1 },
    ResearchItemDef { id: 2256, name: "SteampunkPiano",                needed:   1 },
    ResearchItemDef { id: 2257, name: "HoneyCup",                      needed:   1 },
    ResearchItemDef { id: 2258, name: "SteampunkCup",                  needed:   1 },
    ResearchItemDef { id: 2259, name: "DynastyTable",                  needed:   1 },
    ResearchItemDef { id: 2260, name: "DynastyWood",                   needed: 100 },
    ResearchItemDef { id: 2261, name: "RedDynastyShingles",            needed: 100 },
    ResearchItemDef { id: 2262, name: "BlueDynastyShingles",           needed: 100 },
    ResearchItemDef { id: 2263, name: "WhiteDynastyWall",              needed: 400 },
    ResearchItemDef { id: 2264, name: "BlueDynastyWall",               needed: 400 },
    ResearchItemDef { id: 2265, name: "DynastyDoor",                   needed:   1 },
    ResearchItemDef { id: 2266, name: "Sake",                          needed:   5 },
    ResearchItemDef { id: 2267, name: "PadThai",                       needed:   5 },
    ResearchItemDef { id: 2268, name: "Pho",                           needed:   5 },
    ResearchItemDef { id: 2269, name: "Revolver",                      needed:   1 },
    ResearchItemDef { id: 2270, name: "Gatligator",                    needed:   1 },
    ResearchItemDef { id: 2271, name: "ArcaneRuneWall",                needed: 400 },
    ResearchItemDef { id: 2272, name: "WaterGun",                      needed:   1 },
    ResearchItemDef { id: 2273, name: "Katana",                        needed:   1 },
    ResearchItemDef { id: 2274, name: "UltrabrightTorch",              needed: 100 },
    ResearchItemDef { id: 2275, name: "MagicHat",                      needed:   1 },
    ResearchItemDef { id: 2276, name: "DiamondRing",                   needed:   1 },
    ResearchItemDef { id: 2277, name: "Gi",                            needed:   1 },
    ResearchItemDef { id: 2278, name: "Kimono",                        needed:   1 },
    ResearchItemDef { id: 2279, name: "GypsyRobe",                     needed:   1 },
    ResearchItemDef { id: 2280, name: "BeetleWings",                   needed:   1 },
    ResearchItemDef { id: 2281, name: "TigerSkin",                     needed:   1 },
    ResearchItemDef { id: 2282, name: "LeopardSkin",                   needed:   1 },
    ResearchItemDef { id: 2283, name: "ZebraSkin",                     needed:   1 },
    ResearchItemDef { id: 2284, name: "CrimsonCloak",                  needed:   1 },
    ResearchItemDef { id: 2285, name: "MysteriousCape",                needed:   1 },
    ResearchItemDef { id: 2286, name: "RedCape",                       needed:   1 },
    ResearchItemDef { id: 2287, name: "WinterCape",                    needed:   1 },
    ResearchItemDef { id: 2288, name: "FrozenChair",                   needed:   1 },
    ResearchItemDef { id: 2289, name: "WoodFishingPole",               needed:   1 },
    ResearchItemDef { id: 2290, name: "Bass",                          needed:   2 },
    ResearchItemDef { id: 2291, name: "ReinforcedFishingPole",         needed:   1 },
    ResearchItemDef { id: 2292, name: "FiberglassFishingPole",         needed:   1 },
    ResearchItemDef { id: 2293, name: "FisherofSouls",                 needed:   1 },
    ResearchItemDef { id: 2294, name: "GoldenFishingRod",              needed:   1 },
    ResearchItemDef { id: 2295, name: "MechanicsRod",                  needed:   1 },
    ResearchItemDef { id: 2296, name: "SittingDucksFishingRod",        needed:   1 },
    ResearchItemDef { id: 2297, name: "Trout",                         needed:   2 },
    ResearchItemDef { id: 2298, name: "Salmon",                        needed:   2 },
    ResearchItemDef { id: 2299, name: "AtlanticCod",                   needed:   2 },
    ResearchItemDef { id: 2300, name: "Tuna",                          needed:   2 },
    ResearchItemDef { id: 2301, name: "RedSnapper",                    needed:   2 },
    ResearchItemDef { id: 2302, name: "NeonTetra",                     needed:   2 },
    ResearchItemDef { id: 2303, name: "ArmoredCavefish",               needed:   2 },
    ResearchItemDef { id: 2304, name: "Damselfish",                    needed:   2 },
    ResearchItemDef { id: 2305, name: "CrimsonTigerfish",              needed:   2 },
    ResearchItemDef { id: 2306, name: "FrostMinnow",                   needed:   2 },
    ResearchItemDef { id: 2307, name: "PrincessFish",                  needed:   2 },
    ResearchItemDef { id: 2308, name: "GoldenCarp",                    needed:   2 },
    ResearchItemDef { id: 2309, name: "SpecularFish",                  needed:   2 },
    ResearchItemDef { id: 2310, name: "Prismite",                      needed:   2 },
    ResearchItemDef { id: 2311, name: "VariegatedLardfish",            needed:   2 },
    ResearchItemDef { id: 2312, name: "FlarefinKoi",                   needed:   2 },
    ResearchItemDef { id: 2313, name: "DoubleCod",                     needed:   2 },
    ResearchItemDef { id: 2314, name: "Honeyfin",                      needed:   2 },
    ResearchItemDef { id: 2315, name: "Obsidifish",                    needed:   2 },
    ResearchItemDef { id: 2316, name: "Shrimp",                        needed:   2 },
    ResearchItemDef { id: 2317, name: "ChaosFish",                     needed:   2 },
    ResearchItemDef { id: 2318, name: "Ebonkoi",                       needed:   2 },
    ResearchItemDef { id: 2319, name: "Hemopiranha",                   needed:   2 },
    ResearchItemDef { id: 2320, name: "Rockfish",                      needed:   2 },
    ResearchItemDef { id: 2321, name: "Stinkfish",                     needed:   2 },
    ResearchItemDef { id: 2322, name: "MiningPotion",                  needed:  20 },
    ResearchItemDef { id: 2323, name: "HeartreachPotion",              needed:  20 },
    ResearchItemDef { id: 2324, name: "CalmingPotion",                 needed:  20 },
    ResearchItemDef { id: 2325, name: "BuilderPotion",                 needed:  20 },
    ResearchItemDef { id: 2326, name: "TitanPotion",                   needed:  20 },
    ResearchItemDef { id: 2327, name: "FlipperPotion",                 needed:  20 },
    ResearchItemDef { id: 2328, name: "SummoningPotion",               needed:  20 },
    ResearchItemDef { id: 2329, name: "TrapsightPotion",               needed:  20 },
    ResearchItemDef { id: 2330, name: "PurpleClubberfish",             needed:   1 },
    ResearchItemDef { id: 2331, name: "ObsidianSwordfish",             needed:   1 },
    ResearchItemDef { id: 2332, name: "Swordfish",                     needed:   1 },
    ResearchItemDef { id: 2333, name: "IronFence",                     needed:   1 },
    ResearchItemDef { id: 2334, name: "WoodenCrate",                   needed:   5 },
    ResearchItemDef { id: 2335, name: "IronCrate",                     needed:   5 },
    ResearchItemDef { id: 2336, name: "GoldenCrate",                   needed:   5 },
    ResearchItemDef { id: 2337, name: "OldShoe",                       needed:   1 },
    ResearchItemDef { id: 2338, name: "FishingSeaweed",                needed:   1 },
    ResearchItemDef { id: 2339, name: "TinCan",                        needed:   1 },
    ResearchItemDef { id: 2340, name: "MinecartTrack",                 needed: 100 },
    ResearchItemDef { id: 2341, name: "ReaverShark",                   needed:   1 },
    ResearchItemDef { id: 2342, name: "SawtoothShark",                 needed:   1 },
    ResearchItemDef { id: 2343, name: "Minecart",                      needed:   1 },
    ResearchItemDef { id: 2344, name: "AmmoReservationPotion",         needed:  20 },
    ResearchItemDef { id: 2345, name: "LifeforcePotion",               needed:  20 },
    ResearchItemDef { id: 2346, name: "EndurancePotion",               needed:  20 },
    ResearchItemDef { id: 2347, name: "RagePotion",                    needed:  20 },
    ResearchItemDef { id: 2348, name: "InfernoPotion",                 needed:  20 },
    ResearchItemDef { id: 2349, name: "WrathPotion",                   needed:  20 },
    ResearchItemDef { id: 2350, name: "RecallPotion",                  needed:  20 },
    ResearchItemDef { id: 2351, name: "TeleportationPotion",           needed:  20 },
    ResearchItemDef { id: 2352, name: "LovePotion",                    needed:  20 },
    ResearchItemDef { id: 2353, name: "StinkPotion",                   needed:  20 },
    ResearchItemDef { id: 2354, name: "FishingPotion",                 needed:  20 },
    ResearchItemDef { id: 2355, name: "SonarPotion",                   needed:  20 },
    ResearchItemDef { id: 2356, name: "CratePotion",                   needed:  20 },
    ResearchItemDef { id: 2357, name: "ShiverthornSeeds",              needed:  25 },
    ResearchItemDef { id: 2358, name: "Shiverthorn",                   needed:  25 },
    ResearchItemDef { id: 2359, name: "WarmthPotion",                  needed:  20 },
    ResearchItemDef { id: 2360, name: "FishHook",                      needed:   1 },
    ResearchItemDef { id: 2361, name: "BeeHeadgear",                   needed:   1 },
    ResearchItemDef { id: 2362, name: "BeeBreastplate",                needed:   1 },
    ResearchItemDef { id: 2363, name: "BeeGreaves",                    needed:   1 },
    ResearchItemDef { id: 2364, name: "HornetStaff",                   needed:   1 },
    ResearchItemDef { id: 2365, name: "ImpStaff",                      needed:   1 },
    ResearchItemDef { id: 2366, name: "QueenSpiderStaff",              needed:   1 },
    ResearchItemDef { id: 2367, name: "AnglerHat",                     needed:   1 },
    ResearchItemDef { id: 2368, name: "AnglerVest",                    needed:   1 },
    ResearchItemDef { id: 2369, name: "AnglerPants",                   needed:   1 },
    ResearchItemDef { id: 2370, name: "SpiderMask",                    needed:   1 },
    ResearchItemDef { id: 2371, name: "SpiderBreastplate",             needed:   1 },
    ResearchItemDef { id: 2372, name: "SpiderGreaves",                 needed:   1 },
    ResearchItemDef { id: 2373, name: "HighTestFishingLine",           needed:   1 },
    ResearchItemDef { id: 2374, name: "AnglerEarring",                 needed:   1 },
    ResearchItemDef { id: 2375, name: "TackleBox",                     needed:   1 },
    ResearchItemDef { id: 2376, name: "BlueDungeonPiano",              needed:   1 },
    ResearchItemDef { id: 2377, name: "GreenDungeonPiano",             needed:   1 },
    ResearchItemDef { id: 2378, name: "PinkDungeonPiano",              needed:   1 },
    ResearchItemDef { id: 2379, name: "GoldenPiano",                   needed:   1 },
    ResearchItemDef { id: 2380, name: "ObsidianPiano",                 needed:   1 },
    ResearchItemDef { id: 2381, name: "BonePiano",                     needed:   1 },
    ResearchItemDef { id: 2382, name: "CactusPiano",                   needed:   1 },
    ResearchItemDef { id: 2383, name: "SpookyPiano",                   needed:   1 },
    ResearchItemDef { id: 2384, name: "SkywarePiano",                  needed:   1 },
    ResearchItemDef { id: 2385, name: "LihzahrdPiano",                 needed:   1 },
    ResearchItemDef { id: 2386, name: "BlueDungeonDresser",            needed:   1 },
    ResearchItemDef { id: 2387, name: "GreenDungeonDresser",           needed:   1 },
    ResearchItemDef { id: 2388, name: "PinkDungeonDresser",            needed:   1 },
    ResearchItemDef { id: 2389, name: "GoldenDresser",                 needed:   1 },
    ResearchItemDef { id: 2390, name: "ObsidianDresser",               needed:   1 },
    ResearchItemDef { id: 2391, name: "BoneDresser",                   needed:   1 },
    ResearchItemDef { id: 2392, name: "CactusDresser",                 needed:   1 },
    ResearchItemDef { id: 2393, name: "SpookyDresser",                 needed:   1 },
    ResearchItemDef { id: 2394, name: "SkywareDresser",                needed:   1 },
    ResearchItemDef { id: 2395, name: "HoneyDresser",                  needed:   1 },
    ResearchItemDef { id: 2396, name: "LihzahrdDresser",               needed:   1 },
    ResearchItemDef { id: 2397, name: "Sofa",                          needed:   1 },
    ResearchItemDef { id: 2398, name: "EbonwoodSofa",                  needed:   1 },
    ResearchItemDef { id: 2399, name: "RichMahoganySofa",              needed:   1 },
    ResearchItemDef { id: 2400, name: "PearlwoodSofa",                 needed:   1 },
    ResearchItemDef { id: 2401, name: "ShadewoodSofa",                 needed:   1 },
    ResearchItemDef { id: 2402, name: "BlueDungeonSofa",               needed:   1 },
    ResearchItemDef { id: 2403, name: "GreenDungeonSofa",              needed:   1 },
    ResearchItemDef { id: 2404, name: "PinkDungeonSofa",               needed:   1 },
    ResearchItemDef { id: 2405, name: "GoldenSofa",                    needed:   1 },
    ResearchItemDef { id: 2406, name: "ObsidianSofa",                  needed:   1 },
    ResearchItemDef { id: 2407, name: "BoneSofa",                      needed:   1 },
    ResearchItemDef { id: 2408, name: "CactusSofa",                    needed:   1 },
    ResearchItemDef { id: 2409, name: "SpookySofa",                    needed:   1 },
    ResearchItemDef { id: 2410, name: "SkywareSofa",                   needed:   1 },
    ResearchItemDef { id: 2411, name: "HoneySofa",                     needed:   1 },
    ResearchItemDef { id: 2412, name: "SteampunkSofa",                 needed:   1 },
    ResearchItemDef { id: 2413, name: "MushroomSofa",                  needed:   1 },
    ResearchItemDef { id: 2414, name: "GlassSofa",                     needed:   1 },
    ResearchItemDef { id: 2415, name: "PumpkinSofa",                   needed:   1 },
    ResearchItemDef { id: 2416, name: "LihzahrdSofa",                  needed:   1 },
    ResearchItemDef { id: 2417, name: "SeashellHairpin",               needed:   1 },
    ResearchItemDef { id: 2418, name: "MermaidAdornment",              needed:   1 },
    ResearchItemDef { id: 2419, name: "MermaidTail",                   needed:   1 },
    ResearchItemDef { id: 2420, name: "ZephyrFish",                    needed:   1 },
    ResearchItemDef { id: 2421, name: "Fleshcatcher",                  needed:   1 },
    ResearchItemDef { id: 2422, name: "HotlineFishingHook",            needed:   1 },
    ResearchItemDef { id: 2423, name: "FrogLeg",                       needed:   1 },
    ResearchItemDef { id: 2424, name: "Anchor",                        needed:   1 },
    ResearchItemDef { id: 2425, name: "CookedFish",                    needed:   5 },
    ResearchItemDef { id: 2426, name: "CookedShrimp",                  needed:   5 },
    ResearchItemDef { id: 2427, name: "Sashimi",                       needed:   5 },
    ResearchItemDef { id: 2428, name: "FuzzyCarrot",                   needed:   1 },
    ResearchItemDef { id: 2429, name: "ScalyTruffle",                  needed:   1 },
    ResearchItemDef { id: 2430, name: "SlimySaddle",                   needed:   1 },
    ResearchItemDef { id: 2431, name: "BeeWax",                        needed:  25 },
    ResearchItemDef { id: 2432, name: "CopperPlatingWall",             needed: 400 },
    ResearchItemDef { id: 2433, name: "StoneSlabWall",                 needed: 400 },
    ResearchItemDef { id: 2434, name: "Sail",                          needed: 100 },
    ResearchItemDef { id: 2435, name: "CoralstoneBlock",               needed: 100 },
    ResearchItemDef { id: 2436, name: "BlueJellyfish",                 needed:   5 },
    ResearchItemDef { id: 2437, name: "GreenJellyfish",                needed:   5 },
    ResearchItemDef { id: 2438, name: "PinkJellyfish",                 needed:   5 },
    ResearchItemDef { id: 2439, name: "BlueJellyfishJar",              needed:   1 },
    ResearchItemDef { id: 2440, name: "GreenJellyfishJar",             needed:   1 },
    ResearchItemDef { id: 2441, name: "PinkJellyfishJar",              needed:   1 },
    ResearchItemDef { id: 2442, name: "LifePreserver",                 needed:   1 },
    ResearchItemDef { id: 2443, name: "ShipsWheel",                    needed:   1 },
    ResearchItemDef { id: 2444, name: "CompassRose",                   needed:   1 },
    ResearchItemDef { id: 2445, name: "WallAnchor",                    needed:   1 },
    ResearchItemDef { id: 2446, name: "GoldfishTrophy",                needed:   1 },
    ResearchItemDef { id: 2447, name: "BunnyfishTrophy",               needed:   1 },
    ResearchItemDef { id: 2448, name: "SwordfishTrophy",               needed:   1 },
    ResearchItemDef { id: 2449, name: "SharkteethTrophy",              needed:   1 },
    ResearchItemDef { id: 2450, name: "Batfish",                       needed:   2 },
    ResearchItemDef { id: 2451, name: "BumblebeeTuna",                 needed:   2 },
    ResearchItemDef { id: 2452, name: "Catfish",                       needed:   2 },
    ResearchItemDef { id: 2453, name: "Cloudfish",                     needed:   2 },
    ResearchItemDef { id: 2454, name: "Cursedfish",                    needed:   2 },
    ResearchItemDef { id: 2455, name: "Dirtfish",                      needed:   2 },
    ResearchItemDef { id: 2456, name: "DynamiteFish",                  needed:   2 },
    ResearchItemDef { id: 2457, name: "EaterofPlankton",               needed:   2 },
    ResearchItemDef { id: 2458, name: "FallenStarfish",                needed:   2 },
    ResearchItemDef { id: 2459, name: "TheFishofCthulu",               needed:   2 },
    ResearchItemDef { id: 2460, name: "Fishotron",                     needed:   2 },
    ResearchItemDef { id: 2461, name: "Harpyfish",                     needed:   2 },
    ResearchItemDef { id: 2462, name: "Hungerfish",                    needed:   2 },
    ResearchItemDef { id: 2463, name: "Ichorfish",                     needed:   2 },
    ResearchItemDef { id: 2464, name: "Jewelfish",                     needed:   2 },
    ResearchItemDef { id: 2465, name: "MirageFish",                    needed:   2 },
    ResearchItemDef { id: 2466, name: "MutantFlinxfin",                needed:   2 },
    ResearchItemDef { id: 2467, name: "Pengfish",                      needed:   2 },
    ResearchItemDef { id: 2468, name: "Pixiefish",                     needed:   2 },
    ResearchItemDef { id: 2469, name: "Spiderfish",                    needed:   2 },
    ResearchItemDef { id: 2470, name: "TundraTrout",                   needed:   2 },
    ResearchItemDef { id: 2471, name: "UnicornFish",                   needed:   2 },
    ResearchItemDef { id: 2472, name: "GuideVoodooFish",               needed:   2 },
    ResearchItemDef { id: 2473, name: "Wyverntail",                    needed:   2 },
    ResearchItemDef { id: 2474, name: "ZombieFish",                    needed:   2 },
    ResearchItemDef { id: 2475, name: "AmanitiaFungifin",              needed:   2 },
    ResearchItemDef { id: 2476, name: "Angelfish",                     needed:   2 },
    ResearchItemDef { id: 2477, name: "BloodyManowar",                 needed:   2 },
    ResearchItemDef { id: 2478, name: "Bonefish",                      needed:   2 },
    ResearchItemDef { id: 2479, name: "Bunnyfish",                     needed:   2 },
    ResearchItemDef { id: 2480, name: "CapnTunabeard",                 needed:   2 },
    ResearchItemDef { id: 2481, name: "Clownfish",                     needed:   2 },
    ResearchItemDef { id: 2482, name: "DemonicHellfish",               needed:   2 },
    ResearchItemDef { id: 2483, name: "Derpfish",                      needed:   2 },
    ResearchItemDef { id: 2484, name: "Fishron",                       needed:   2 },
    ResearchItemDef { id: 2485, name: "InfectedScabbardfish",          needed:   2 },
    ResearchItemDef { id: 2486, name: "Mudfish",                       needed:   2 },
    ResearchItemDef { id: 2487, name: "Slimefish",                     needed:   2 },
    ResearchItemDef { id: 2488, name: "TropicalBarracuda",             needed:   2 },
    ResearchItemDef { id: 2489, name: "KingSlimeTrophy",               needed:   1 },
    ResearchItemDef { id: 2490, name: "ShipInABottle",                 needed:   1 },
    ResearchItemDef { id: 2491, name: "HardySaddle",                   needed:   1 },
    ResearchItemDef { id: 2492, name: "PressureTrack",                 needed: 100 },
    ResearchItemDef { id: 2493, name: "KingSlimeMask",                 needed:   1 },
    ResearchItemDef { id: 2494, name: "FinWings",                      needed:   1 },
    ResearchItemDef { id: 2495, name: "TreasureMap",                   needed:   1 },
    ResearchItemDef { id: 2496, name: "SeaweedPlanter",                needed:   1 },
    ResearchItemDef { id: 2497, name: "PillaginMePixels",              needed:   1 },
    ResearchItemDef { id: 2498, name: "FishCostumeMask",               needed:   1 },
    ResearchItemDef { id: 2499, name: "FishCostumeShirt",              needed:   1 },
    ResearchItemDef { id: 2500, name: "FishCostumeFinskirt",           needed:   1 },
    ResearchItemDef { id: 2501, name: "GingerBeard",                   needed:   1 },
    ResearchItemDef { id: 2502, name: "HoneyedGoggles",                needed:   1 },
    ResearchItemDef { id: 2503, name: "BorealWood",                    needed: 100 },
    ResearchItemDef { id: 2504, name: "PalmWood",                      needed: 100 },
    ResearchItemDef { id: 2505, name: "BorealWoodWall",                needed: 400 },
    ResearchItemDef { id: 2506, name: "PalmWoodWall",                  needed: 400 },
    ResearchItemDef { id: 2507, name: "BorealWoodFence",               needed:   1 },
    ResearchItemDef { id: 2508, name: "PalmWoodFence",                 needed:   1 },
    ResearchItemDef { id: 2509, name: "BorealWoodHelmet",              needed:   1 },
    ResearchItemDef { id: 2510, name: "BorealWoodBreastplate",         needed:   1 },
    ResearchItemDef { id: 2511, name: "BorealWoodGreaves",             needed:   1 },
    ResearchItemDef { id: 2512, name: "PalmWoodHelmet",                needed:   1 },
    ResearchItemDef { id: 2513, name: "PalmWoodBreastplate",           needed:   1 },
    ResearchItemDef { id: 2514, name: "PalmWoodGreaves",               needed:   1 },
    ResearchItemDef { id: 2515, name: "PalmWoodBow",                   needed:   1 },
    ResearchItemDef { id: 2516, name: "PalmWoodHammer",                needed:   1 },
    ResearchItemDef { id: 2517, name: "PalmWoodSword",                 needed:   1 },
    ResearchItemDef { id: 2518, name: "PalmWoodPlatform",              needed: 200 },
    ResearchItemDef { id: 2519, name: "PalmWoodBathtub",               needed:   1 },
    ResearchItemDef { id: 2520, name: "PalmWoodBed",                   needed:   1 },
    ResearchItemDef { id: 2521, name: "PalmWoodBench",                 needed:   1 },
    ResearchItemDef { id: 2522, name: "PalmWoodCandelabra",            needed:   1 },
    ResearchItemDef { id: 2523, name: "PalmWoodCandle",                needed:   1 },
    ResearchItemDef { id: 2524, name: "PalmWoodChair",                 needed:   1 },
    ResearchItemDef { id: 2525, name: "PalmWoodChandelier",            needed:   1 },
    ResearchItemDef { id: 2526, name: "PalmWoodChest",                 needed:   1 },
    ResearchItemDef { id: 2527, name: "PalmWoodSofa",                  needed:   1 },
    ResearchItemDef { id: 2528, name: "PalmWoodDoor",                  needed:   1 },
    ResearchItemDef { id: 2529, name: "PalmWoodDresser",               needed:   1 },
    ResearchItemDef { id: 2530, name: "PalmWoodLantern",               needed:   1 },
    ResearchItemDef { id: 2531, name: "PalmWoodPiano",                 needed:   1 },
    ResearchItemDef { id: 2532, name: "PalmWoodTable",                 needed:   1 },
    ResearchItemDef { id: 2533, name: "PalmWoodLamp",                  needed:   1 },
    ResearchItemDef { id: 2534, name: "PalmWoodWorkBench",             needed:   1 },
    ResearchItemDef { id: 2535, name: "OpticStaff",                    needed:   1 },
    ResearchItemDef { id: 2536, name: "PalmWoodBookcase",              needed:   1 },
    ResearchItemDef { id: 2537, name: "MushroomBathtub",               needed:   1 },
    ResearchItemDef { id: 2538, name: "MushroomBed",                   needed:   1 },
    ResearchItemDef { id: 2539, name: "MushroomBench",                 needed:   1 },
    ResearchItemDef { id: 2540, name: "MushroomBookcase",              needed:   1 },
    ResearchItemDef { id: 2541, name: "MushroomCandelabra",            needed:   1 },
    ResearchItemDef { id: 2542, name: "MushroomCandle",                needed:   1 },
    ResearchItemDef { id: 2543, name: "MushroomChandelier",            needed:   1 },
    ResearchItemDef { id: 2544, name: "MushroomChest",                 needed:   1 },
    ResearchItemDef { id: 2545, name: "MushroomDresser",               needed:   1 },
    ResearchItemDef { id: 2546, name: "MushroomLantern",               needed:   1 },
    ResearchItemDef { id: 2547, name: "MushroomLamp",                  needed:   1 },
    ResearchItemDef { id: 2548, name: "MushroomPiano",                 needed:   1 },
    ResearchItemDef { id: 2549, name: "MushroomPlatform",              needed: 200 },
    ResearchItemDef { id: 2550, name: "MushroomTable",                 needed:   1 },
    ResearchItemDef { id: 2551, name: "SpiderStaff",                   needed:   1 },
    ResearchItemDef { id: 2552, name: "BorealWoodBathtub",             needed:   1 },
    ResearchItemDef { id: 2553, name: "BorealWoodBed",                 needed:   1 },
    ResearchItemDef { id: 2554, name: "BorealWoodBookcase",            needed:   1 },
    ResearchItemDef { id: 2555, name: "BorealWoodCandelabra",          needed:   1 },
    ResearchItemDef { id: 2556, name: "BorealWoodCandle",              needed:   1 },
    ResearchItemDef { id: 2557, name: "BorealWoodChair",               needed:   1 },
    ResearchItemDef { id: 2558, name: "BorealWoodChandelier",          needed:   1 },
    ResearchItemDef { id: 2559, name: "BorealWoodChest",               needed:   1 },
    ResearchItemDef { id: 2560, name: "BorealWoodClock",               needed:   1 },
    ResearchItemDef { id: 2561, name: "BorealWoodDoor",                needed:   1 },
    ResearchItemDef { id: 2562, name: "BorealWoodDresser",             needed:   1 },
    ResearchItemDef { id: 2563, name: "BorealWoodLamp",                needed:   1 },
    ResearchItemDef { id: 2564, name: "BorealWoodLantern",             needed:   1 },
    ResearchItemDef { id: 2565, name: "BorealWoodPiano",               needed:   1 },
    ResearchItemDef { id: 2566, name: "BorealWoodPlatform",            needed: 200 },
    ResearchItemDef { id: 2567, name: "SlimeBathtub",                  needed:   1 },
    ResearchItemDef { id: 2568, name: "SlimeBed",                      needed:   1 },
    ResearchItemDef { id: 2569, name: "SlimeBookcase",                 needed:   1 },
    ResearchItemDef { id: 2570, name: "SlimeCandelabra",               needed:   1 },
    ResearchItemDef { id: 2571, name: "SlimeCandle",                   needed:   1 },
    ResearchItemDef { id: 2572, name: "SlimeChair",                    needed:   1 },
    ResearchItemDef { id: 2573, name: "SlimeChandelier",               needed:   1 },
    ResearchItemDef { id: 2574, name: "SlimeChest",                    needed:   1 },
    ResearchItemDef { id: 2575, name: "SlimeClock",                    needed:   1 },
    ResearchItemDef { id: 2576, name: "SlimeDoor",                     needed:   1 },
    ResearchItemDef { id: 2577, name: "SlimeDresser",                  needed:   1 },
    ResearchItemDef { id: 2578, name: "SlimeLamp",                     needed:   1 },
    ResearchItemDef { id: 2579, name: "SlimeLantern",                  needed:   1 },
    ResearchItemDef { id: 2580, name: "SlimePiano",                    needed:   1 },
    ResearchItemDef { id: 2581, name: "SlimePlatform",                 needed: 200 },
    ResearchItemDef { id: 2582, name: "SlimeSofa",                     needed:   1 },
    ResearchItemDef { id: 2583, name: "SlimeTable",                    needed:   1 },
    ResearchItemDef { id: 2584, name: "PirateStaff",                   needed:   1 },
    ResearchItemDef { id: 2585, name: "SlimeHook",                     needed:   1 },
    ResearchItemDef { id: 2586, name: "StickyGrenade",                 needed:  99 },
    ResearchItemDef { id: 2587, name: "TartarSauce",                   needed:   1 },
    ResearchItemDef { id: 2588, name: "DukeFishronMask",               needed:   1 },
    ResearchItemDef { id: 2589, name: "DukeFishronTrophy",             needed:   1 },
    ResearchItemDef { id: 2590, name: "MolotovCocktail",               needed:  99 },
    ResearchItemDef { id: 2591, name: "BoneClock",                     needed:   1 },
    ResearchItemDef { id: 2592, name: "CactusClock",                   needed:   1 },
    ResearchItemDef { id: 2593, name: "EbonwoodClock",                 needed:   1 },
    ResearchItemDef { id: 2594, name: "FrozenClock",                   needed:   1 },
    ResearchItemDef { id: 2595, name: "LihzahrdClock",                 needed:   1 },
    ResearchItemDef { id: 2596, name: "LivingWoodClock",               needed:   1 },
    ResearchItemDef { id: 2597, name: "RichMahoganyClock",             needed:   1 },
    ResearchItemDef { id: 2598, name: "FleshClock",                    needed:   1 },
    ResearchItemDef { id: 2599, name: "MushroomClock",                 needed:   1 },
    ResearchItemDef { id: 2600, name: "ObsidianClock",                 needed:   1 },
    ResearchItemDef { id: 2601, name: "PalmWoodClock",                 needed:   1 },
    ResearchItemDef { id: 2602, name: "PearlwoodClock",                needed:   1 },
    ResearchItemDef { id: 2603, name: "PumpkinClock",                  needed:   1 },
    ResearchItemDef { id: 2604, name: "ShadewoodClock",                needed:   1 },
    ResearchItemDef { id: 2605, name: "SpookyClock",                   needed:   1 },
    ResearchItemDef { id: 2606, name: "SkywareClock",                  needed:   1 },
    ResearchItemDef { id: 2607, name: "SpiderFang",                    needed:  25 },
    ResearchItemDef { id: 2608, name: "FalconBlade",                   needed:   1 },
    ResearchItemDef { id: 2609, name: "FishronWings",                  needed:   1 },
    ResearchItemDef { id: 2610, name: "SlimeGun",                      needed:   1 },
    ResearchItemDef { id: 2611, name: "Flairon",                       needed:   1 },
    ResearchItemDef { id: 2612, name: "GreenDungeonChest",             needed:   1 },
    ResearchItemDef { id: 2613, name: "PinkDungeonChest",              needed:   1 },
    ResearchItemDef { id: 2614, name: "BlueDungeonChest",              needed:   1 },
    ResearchItemDef { id: 2615, name: "BoneChest",                     needed:   1 },
    ResearchItemDef { id: 2616, name: "CactusChest",                   needed:   1 },
    ResearchItemDef { id: 2617, name: "FleshChest",                    needed:   1 },
    ResearchItemDef { id: 2618, name: "ObsidianChest",                 needed:   1 },
    ResearchItemDef { id: 2619, name: "PumpkinChest",                  needed:   1 },
    ResearchItemDef { id: 2620, name: "SpookyChest",                   needed:   1 },
    ResearchItemDef { id: 2621, name: "TempestStaff",                  needed:   1 },
    ResearchItemDef { id: 2622, name: "RazorbladeTyphoon",             needed:   1 },
    ResearchItemDef { id: 2623, name: "BubbleGun",                     needed:   1 },
    ResearchItemDef { id: 2624, name: "Tsunami",                       needed:   1 },
    ResearchItemDef { id: 2625, name: "Seashell",                      needed:   3 },
    ResearchItemDef { id: 2626, name: "Starfish",                      needed:   3 },
    ResearchItemDef { id: 2627, name: "SteampunkPlatform",             needed: 200 },
    ResearchItemDef { id: 2628, name: "SkywarePlatform",               needed: 200 },
    ResearchItemDef { id: 2629, name: "LivingWoodPlatform",            needed: 200 },
    ResearchItemDef { id: 2630, name: "HoneyPlatform",                 needed: 200 },
    ResearchItemDef { id: 2631, name: "SkywareWorkbench",              needed:   1 },
    ResearchItemDef { id: 2632, name: "GlassWorkBench",                needed:   1 },
    ResearchItemDef { id: 2633, name: "LivingWoodWorkBench",           needed:   1 },
    ResearchItemDef { id: 2634, name: "FleshSofa",                     needed:   1 },
    ResearchItemDef { id: 2635, name: "FrozenSofa",                    needed:   1 },
    ResearchItemDef { id: 2636, name: "LivingWoodSofa",                needed:   1 },
    ResearchItemDef { id: 2637, name: "PumpkinDresser",                needed:   1 },
    ResearchItemDef { id: 2638, name: "SteampunkDresser",              needed:   1 },
    ResearchItemDef { id: 2639, name: "GlassDresser",                  needed:   1 },
    ResearchItemDef { id: 2640, name: "FleshDresser",                  needed:   1 },
    ResearchItemDef { id: 2641, name: "PumpkinLantern",                needed:   1 },
    ResearchItemDef { id: 2642, name: "ObsidianLantern",               needed:   1 },
    ResearchItemDef { id: 2643, name: "PumpkinLamp",                   needed:   1 },
    ResearchItemDef { id: 2644, name: "ObsidianLamp",                  needed:   1 },
    ResearchItemDef { id: 2645, name: "BlueDungeonLamp",               needed:   1 },
    ResearchItemDef { id: 2646, name: "GreenDungeonLamp",              needed:   1 },
    ResearchItemDef { id: 2647, name: "PinkDungeonLamp",               needed:   1 },
    ResearchItemDef { id: 2648, name: "HoneyCandle",                   needed:   1 },
    ResearchItemDef { id: 2649, name: "SteampunkCandle",               needed:   1 },
    ResearchItemDef { id: 2650, name: "SpookyCandle",                  needed:   1 },
    ResearchItemDef { id: 2651, name: "ObsidianCandle",                needed:   1 },
    ResearchItemDef { id: 2652, name: "BlueDungeonChandelier",         needed:   1 },
    ResearchItemDef { id: 2653, name: "GreenDungeonChandelier",        needed:   1 },
    ResearchItemDef { id: 2654, name: "PinkDungeonChandelier",         needed:   1 },
    ResearchItemDef { id: 2655, name: "SteampunkChandelier",           needed:   1 },
    ResearchItemDef { id: 2656, name: "PumpkinChandelier",             needed:   1 },
    ResearchItemDef { id: 2657, name: "ObsidianChandelier",            needed:   1 },
    ResearchItemDef { id: 2658, name: "BlueDungeonBathtub",            needed:   1 },
    ResearchItemDef { id: 2659, name: "GreenDungeonBathtub",           needed:   1 },
    ResearchItemDef { id: 2660, name: "PinkDungeonBathtub",            needed:   1 },
    ResearchItemDef { id: 2661, name: "PumpkinBathtub",                needed:   1 },
    ResearchItemDef { id: 2662, name: "ObsidianBathtub",               needed:   1 },
    ResearchItemDef { id: 2663, name: "GoldenBathtub",                 needed:   1 },
    ResearchItemDef { id: 2664, name: "BlueDungeonCandelabra",         needed:   1 },
    ResearchItemDef { id: 2665, name: "GreenDungeonCandelabra",        needed:   1 },
    ResearchItemDef { id: 2666, name: "PinkDungeonCandelabra",         needed:   1 },
    ResearchItemDef { id: 2667, name: "ObsidianCandelabra",            needed:   1 },
    ResearchItemDef { id: 2668, name: "PumpkinCandelabra",             needed:   1 },
    ResearchItemDef { id: 2669, name: "PumpkinBed",                    needed:   1 },
    ResearchItemDef { id: 2670, name: "PumpkinBookcase",               needed:   1 },
    ResearchItemDef { id: 2671, name: "PumpkinPiano",                  needed:   1 },
    ResearchItemDef { id: 2672, name: "SharkStatue",                   needed:   1 },
    ResearchItemDef { id: 2673, name: "TruffleWorm",                   needed:   3 },
    ResearchItemDef { id: 2674, name: "ApprenticeBait",                needed:   5 },
    ResearchItemDef { id: 2675, name: "JourneymanBait",                needed:   5 },
    ResearchItemDef { id: 2676, name: "MasterBait",                    needed:   5 },
    ResearchItemDef { id: 2677, name: "AmberGemsparkWall",             needed: 400 },
    ResearchItemDef { id: 2678, name: "AmberGemsparkWallOff",          needed: 400 },
    ResearchItemDef { id: 2679, name: "AmethystGemsparkWall",          needed: 400 },
    ResearchItemDef { id: 2680, name: "AmethystGemsparkWallOff",       needed: 400 },
    ResearchItemDef { id: 2681, name: "DiamondGemsparkWall",           needed: 400 },
    ResearchItemDef { id: 2682, name: "DiamondGemsparkWallOff",        needed: 400 },
    ResearchItemDef { id: 2683, name: "EmeraldGemsparkWall",           needed: 400 },
    ResearchItemDef { id: 2684, name: "EmeraldGemsparkWallOff",        needed: 400 },
    ResearchItemDef { id: 2685, name: "RubyGemsparkWall",              needed: 400 },
    ResearchItemDef { id: 2686, name: "RubyGemsparkWallOff",           needed: 400 },
    ResearchItemDef { id: 2687, name: "SapphireGemsparkWall",          needed: 400 },
    ResearchItemDef { id: 2688, name: "SapphireGemsparkWallOff",       needed: 400 },
    ResearchItemDef { id: 2689, name: "TopazGemsparkWall",             needed: 400 },
    ResearchItemDef { id: 2690, name: "TopazGemsparkWallOff",          needed: 400 },
    ResearchItemDef { id: 2691, name: "TinPlatingWall",                needed: 400 },
    ResearchItemDef { id: 2692, name: "TinPlating",                    needed: 100 },
    ResearchItemDef { id: 2693, name: "WaterfallBlock",                needed: 100 },
    ResearchItemDef { id: 2694, name: "LavafallBlock",                 needed: 100 },
    ResearchItemDef { id: 2695, name: "ConfettiBlock",                 needed: 100 },
    ResearchItemDef { id: 2696, name: "ConfettiWall",                  needed: 400 },
    ResearchItemDef { id: 2697, name: "ConfettiBlockBlack",            needed:   1 },
    ResearchItemDef { id: 2698, name: "ConfettiWallBlack",             needed:   1 },
    ResearchItemDef { id: 2699, name: "WeaponRack",                    needed:   1 },
    ResearchItemDef { id: 2700, name: "FireworksBox",                  needed:   1 },
    ResearchItemDef { id: 2701, name: "LivingFireBlock",               needed: 100 },
    ResearchItemDef { id: 2702, name: "AlphabetStatue0",               needed:   1 },
    ResearchItemDef { id: 2703, name: "AlphabetStatue1",               needed:   1 },
    ResearchItemDef { id: 2704, name: "AlphabetStatue2",               needed:   1 },
    ResearchItemDef { id: 2705, name: "AlphabetStatue3",               needed:   1 },
    ResearchItemDef { id: 2706, name: "AlphabetStatue4",               needed:   1 },
    ResearchItemDef { id: 2707, name: "AlphabetStatue5",               needed:   1 },
    ResearchItemDef { id: 2708, name: "AlphabetStatue6",               needed:   1 },
    ResearchItemDef { id: 2709, name: "AlphabetStatue7",               needed:   1 },
    ResearchItemDef { id: 2710, name: "AlphabetStatue8",               needed:   1 },
    ResearchItemDef { id: 2711, name: "AlphabetStatue9",               needed:   1 },
    ResearchItemDef { id: 2712, name: "AlphabetStatueA",               needed:   1 },
    ResearchItemDef { id: 2713, name: "AlphabetStatueB",               needed:   1 },
    ResearchItemDef { id: 2714, name: "AlphabetStatueC",               needed:   1 },
    ResearchItemDef { id: 2715, name: "AlphabetStatueD",               needed:   1 },
    ResearchItemDef { id: 2716, name: "AlphabetStatueE",               needed:   1 },
    ResearchItemDef { id: 2717, name: "AlphabetStatueF",               needed:   1 },
    ResearchItemDef { id: 2718, name: "AlphabetStatueG",               needed:   1 },
    ResearchItemDef { id: 2719, name: "AlphabetStatueH",               needed:   1 },
    ResearchItemDef { id: 2720, name: "AlphabetStatueI",               needed:   1 },
    ResearchItemDef { id: 2721, name: "AlphabetStatueJ",               needed:   1 },
    ResearchItemDef { id: 2722, name: "AlphabetStatueK",               needed:   1 },
    ResearchItemDef { id: 2723, name: "AlphabetStatueL",               needed:   1 },
    ResearchItemDef { id: 2724, name: "AlphabetStatueM",               needed:   1 },
    ResearchItemDef { id: 2725, name: "AlphabetStatueN",               needed:   1 },
    ResearchItemDef { id: 2726, name: "AlphabetStatueO",               needed:   1 },
    ResearchItemDef { id: 2727, name: "AlphabetStatueP",               needed:   1 },
    ResearchItemDef { id: 2728, name: "AlphabetStatueQ",               needed:   1 },
    ResearchItemDef { id: 2729, name: "AlphabetStatueR",               needed:   1 },
    ResearchItemDef { id: 2730, name: "AlphabetStatueS",               needed:   1 },
    ResearchItemDef { id: 2731, name: "AlphabetStatueT",               needed:   1 },
    ResearchItemDef { id: 2732, name: "AlphabetStatueU",               needed:   1 },
    ResearchItemDef { id: 2733, name: "AlphabetStatueV",               needed:   1 },
    ResearchItemDef { id: 2734, name: "AlphabetStatueW",               needed:   1 },
    ResearchItemDef { id: 2735, name: "AlphabetStatueX",               needed:   1 },
    ResearchItemDef { id: 2736, name: "AlphabetStatueY",               needed:   1 },
    ResearchItemDef { id: 2737, name: "AlphabetStatueZ",               needed:   1 },
    ResearchItemDef { id: 2738, name: "FireworkFountain",              needed:   1 },
    ResearchItemDef { id: 2739, name: "BoosterTrack",                  needed: 100 },
    ResearchItemDef { id: 2740, name: "Grasshopper",                   needed:   5 },
    ResearchItemDef { id: 2741, name: "GrasshopperCage",               needed:   1 },
    ResearchItemDef { id: 2742, name: "MusicBoxUndergroundCrimson",    needed:   1 },
    ResearchItemDef { id: 2743, name: "CactusTable",                   needed:   1 },
    ResearchItemDef { id: 2744, name: "CactusPlatform",                needed: 200 },
    ResearchItemDef { id: 2745, name: "BorealWoodSword",               needed:   1 },
    ResearchItemDef { id: 2746, name: "BorealWoodHammer",              needed:   1 },
    ResearchItemDef { id: 2747, name: "BorealWoodBow",                 needed:   1 },
    ResearchItemDef { id: 2748, name: "GlassChest",                    needed:   1 },
    ResearchItemDef { id: 2749, name: "XenoStaff",                     needed:   1 },
    ResearchItemDef { id: 2750, name: "MeteorStaff",                   needed:   1 },
    ResearchItemDef { id: 2751, name: "LivingCursedFireBlock",         needed: 100 },
    ResearchItemDef { id: 2752, name: "LivingDemonFireBlock",          needed: 100 },
    ResearchItemDef { id: 2753, name: "LivingFrostFireBlock",          needed: 100 },
    ResearchItemDef { id: 2754, name: "LivingIchorBlock",              needed: 100 },
    ResearchItemDef { id: 2755, name: "LivingUltrabrightFireBlock",    needed: 100 },
    ResearchItemDef { id: 2756, name: "GenderChangePotion",            needed:  20 },
    ResearchItemDef { id: 2757, name: "VortexHelmet",                  needed:   1 },
    ResearchItemDef { id: 2758, name: "VortexBreastplate",             needed:   1 },
    ResearchItemDef { id: 2759, name: "VortexLeggings",                needed:   1 },
    ResearchItemDef { id: 2760, name: "NebulaHelmet",                  needed:   1 },
    ResearchItemDef { id: 2761, name: "NebulaBreastplate",             needed:   1 },
    ResearchItemDef { id: 2762, name: "NebulaLeggings",                needed:   1 },
    ResearchItemDef { id: 2763, name: "SolarFlareHelmet",              needed:   1 },
    ResearchItemDef { id: 2764, name: "SolarFlareBreastplate",         needed:   1 },
    ResearchItemDef { id: 2765, name: "SolarFlareLeggings",            needed:   1 },
    ResearchItemDef { id: 2766, name: "LunarTabletFragment",           needed:  25 },
    ResearchItemDef { id: 2767, name: "SolarTablet",                   needed:   3 },
    ResearchItemDef { id: 2768, name: "DrillContainmentUnit",          needed:   1 },
    ResearchItemDef { id: 2769, name: "CosmicCarKey",                  needed:   1 },
    ResearchItemDef { id: 2770, name: "MothronWings",                  needed:   1 },
    ResearchItemDef { id: 2771, name: "BrainScrambler",                needed:   1 },
    ResearchItemDef { id: 2772, name: "VortexAxe",                     needed:   1 },
    ResearchItemDef { id: 2773, name: "VortexChainsaw",                needed:   1 },
    ResearchItemDef { id: 2774, name: "VortexDrill",                   needed:   1 },
    ResearchItemDef { id: 2775, name: "VortexHammer",                  needed:   1 },
    ResearchItemDef { id: 2776, name: "VortexPickaxe",                 needed:   1 },
    ResearchItemDef { id: 2777, name: "NebulaAxe",                     needed:   1 },
    ResearchItemDef { id: 2778, name: "NebulaChainsaw",                needed:   1 },
    ResearchItemDef { id: 2779, name: "NebulaDrill",                   needed:   1 },
    ResearchItemDef { id: 2780, name: "NebulaHammer",                  needed:   1 },
    ResearchItemDef { id: 2781, name: "NebulaPickaxe",                 needed:   1 },
    ResearchItemDef { id: 2782, name: "SolarFlareAxe",                 needed:   1 },
    ResearchItemDef { id: 2783, name: "SolarFlareChainsaw",            needed:   1 },
    ResearchItemDef { id: 2784, name: "SolarFlareDrill",               needed:   1 },
    ResearchItemDef { id: 2785, name: "SolarFlareHammer",              needed:   1 },
    ResearchItemDef { id: 2786, name: "SolarFlarePickaxe",             needed:   1 },
    ResearchItemDef { id: 2787, name: "HoneyfallBlock",                needed: 100 },
    ResearchItemDef { id: 2788, name: "HoneyfallWall",                 needed: 400 },
    ResearchItemDef { id: 2789, name: "ChlorophyteBrickWall",          needed: 400 },
    ResearchItemDef { id: 2790, name: "CrimtaneBrickWall",             needed: 400 },
    ResearchItemDef { id: 2791, name: "ShroomitePlatingWall",          needed: 400 },
    ResearchItemDef { id: 2792, name: "ChlorophyteBrick",              needed: 100 },
    ResearchItemDef { id: 2793, name: "CrimtaneBrick",                 needed: 100 },
    ResearchItemDef { id: 2794, name: "ShroomitePlating",              needed: 100 },
    ResearchItemDef { id: 2795, name: "LaserMachinegun",               needed:   1 },
    ResearchItemDef { id: 2796, name: "ElectrosphereLauncher",         needed:   1 },
    ResearchItemDef { id: 2797, name: "Xenopopper",                    needed:   1 },
    ResearchItemDef { id: 2798, name: "LaserDrill",                    needed:   1 },
    ResearchItemDef { id: 2799, name: "LaserRuler",                    needed:   1 },
    ResearchItemDef { id: 2800, name: "AntiGravityHook",               needed:   1 },
    ResearchItemDef { id: 2801, name: "MoonMask",                      needed:   1 },
    ResearchItemDef { id: 2802, name: "SunMask",                       needed:   1 },
    ResearchItemDef { id: 2803, name: "MartianCostumeMask",            needed:   1 },
    ResearchItemDef { id: 2804, name: "MartianCostumeShirt",           needed:   1 },
    ResearchItemDef { id: 2805, name: "MartianCostumePants",           needed:   1 },
    ResearchItemDef { id: 2806, name: "MartianUniformHelmet",          needed:   1 },
    ResearchItemDef { id: 2807, name: "MartianUniformTorso",           needed:   1 },
    ResearchItemDef { id: 2808, name: "MartianUniformPants",           needed:   1 },
    ResearchItemDef { id: 2809, name: "MartianAstroClock",             needed:   1 },
    ResearchItemDef { id: 2810, name: "MartianBathtub",                needed:   1 },
    ResearchItemDef { id: 2811, name: "MartianBed",                    needed:   1 },
    ResearchItemDef { id: 2812, name: "MartianHoverChair",             needed:   1 },
    ResearchItemDef { id: 2813, name: "MartianChandelier",             needed:   1 },
    ResearchItemDef { id: 2814, name: "MartianChest",                  needed:   1 },
    ResearchItemDef { id: 2815, name: "MartianDoor",                   needed:   1 },
    ResearchItemDef { id: 2816, name: "MartianDresser",                needed:   1 },
    ResearchItemDef { id: 2817, name: "MartianHolobookcase",           needed:   1 },
    ResearchItemDef { id: 2818, name: "MartianHoverCandle",            needed:   1 },
    ResearchItemDef { id: 2819, name: "MartianLamppost",               needed:   1 },
    ResearchItemDef { id: 2820, name: "MartianLantern",                needed:   1 },
    ResearchItemDef { id: 2821, name: "MartianPiano",                  needed:   1 },
    ResearchItemDef { id: 2822, name: "MartianPlatform",               needed: 200 },
    ResearchItemDef { id: 2823, name: "MartianSofa",                   needed:   1 },
    ResearchItemDef { id: 2824, name: "MartianTable",                  needed:   1 },
    ResearchItemDef { id: 2825, name: "MartianTableLamp",              needed:   1 },
    ResearchItemDef { id: 2826, name: "MartianWorkBench",              needed:   1 },
    ResearchItemDef { id: 2827, name: "WoodenSink",                    needed:   1 },
    ResearchItemDef { id: 2828, name: "EbonwoodSink",                  needed:   1 },
    ResearchItemDef { id: 2829, name: "RichMahoganySink",              needed:   1 },
    ResearchItemDef { id: 2830, name: "PearlwoodSink",                 needed:   1 },
    ResearchItemDef { id: 2831, name: "BoneSink",                      needed:   1 },
    ResearchItemDef { id: 2832, name: "FleshSink",                     needed:   1 },
    ResearchItemDef { id: 2833, name: "LivingWoodSink",                needed:   1 },
    ResearchItemDef { id: 2834, name: "SkywareSink",                   needed:   1 },
    ResearchItemDef { id: 2835, name: "ShadewoodSink",                 needed:   1 },
    ResearchItemDef { id: 2836, name: "LihzahrdSink",                  needed:   1 },
    ResearchItemDef { id: 2837, name: "BlueDungeonSink",               needed:   1 },
    ResearchItemDef { id: 2838, name: "GreenDungeonSink",              needed:   1 },
    ResearchItemDef { id: 2839, name: "PinkDungeonSink",               needed:   1 },
    ResearchItemDef { id: 2840, name: "ObsidianSink",                  needed:   1 },
    ResearchItemDef { id: 2841, name: "MetalSink",                     needed:   1 },
    ResearchItemDef { id: 2842, name: "GlassSink",                     needed:   1 },
    ResearchItemDef { id: 2843, name: "GoldenSink",                    needed:   1 },
    ResearchItemDef { id: 2844, name: "HoneySink",                     needed:   1 },
    ResearchItemDef { id: 2845, name: "SteampunkSink",                 needed:   1 },
    ResearchItemDef { id: 2846, name: "PumpkinSink",                   needed:   1 },
    ResearchItemDef { id: 2847, name: "SpookySink",                    needed:   1 },
    ResearchItemDef { id: 2848, name: "FrozenSink",                    needed:   1 },
    ResearchItemDef { id: 2849, name: "DynastySink",                   needed:   1 },
    ResearchItemDef { id: 2850, name: "PalmWoodSink",                  needed:   1 },
    ResearchItemDef { id: 2851, name: "MushroomSink",                  needed:   1 },
    ResearchItemDef { id: 2852, name: "BorealWoodSink",                needed:   1 },
    ResearchItemDef { id: 2853, name: "SlimeSink",                     needed:   1 },
    ResearchItemDef { id: 2854, name: "CactusSink",                    needed:   1 },
    ResearchItemDef { id: 2855, name: "MartianSink",                   needed:   1 },
    ResearchItemDef { id: 2856, name: "WhiteLunaticHood",              needed:   1 },
    ResearchItemDef { id: 2857, name: "BlueLunaticHood",               needed:   1 },
    ResearchItemDef { id: 2858, name: "WhiteLunaticRobe",              needed:   1 },
    ResearchItemDef { id: 2859, name: "BlueLunaticRobe",               needed:   1 },
    ResearchItemDef { id: 2860, name: "MartianConduitPlating",         needed: 100 },
    ResearchItemDef { id: 2861, name: "MartianConduitWall",            needed: 400 },
    ResearchItemDef { id: 2862, name: "HiTekSunglasses",               needed:   1 },
    ResearchItemDef { id: 2863, name: "MartianHairDye",                needed:   3 },
    ResearchItemDef { id: 2864, name: "MartianArmorDye",               needed:   3 },
    ResearchItemDef { id: 2865, name: "PaintingCastleMarsberg",        needed:   1 },
    ResearchItemDef { id: 2866, name: "PaintingMartiaLisa",            needed:   1 },
    ResearchItemDef { id: 2867, name: "PaintingTheTruthIsUpThere",     needed:   1 },
    ResearchItemDef { id: 2868, name: "SmokeBlock",                    needed: 100 },
    ResearchItemDef { id: 2869, name: "LivingFlameDye",                needed:   3 },
    ResearchItemDef { id: 2870, name: "LivingRainbowDye",              needed:   3 },
    ResearchItemDef { id: 2871, name: "ShadowDye",                     needed:   3 },
    ResearchItemDef { id: 2872, name: "NegativeDye",                   needed:   3 },
    ResearchItemDef { id: 2873, name: "LivingOceanDye",                needed:   3 },
    ResearchItemDef { id: 2874, name: "BrownDye",                      needed:   3 },
    ResearchItemDef { id: 2875, name: "BrownAndBlackDye",              needed:   3 },
    ResearchItemDef { id: 2876, name: "BrightBrownDye",                needed:   3 },
    ResearchItemDef { id: 2877, name: "BrownAndSilverDye",             needed:   3 },
    ResearchItemDef { id: 2878, name: "WispDye",                       needed:   3 },
    ResearchItemDef { id: 2879, name: "PixieDye",                      needed:   3 },
    ResearchItemDef { id: 2880, name: "InfluxWaver",                   needed:   1 },
    ResearchItemDef { id: 2881, name: "PhasicWarpEjector",             needed:   1 },
    ResearchItemDef { id: 2882, name: "ChargedBlasterCannon",          needed:   1 },
    ResearchItemDef { id: 2883, name: "ChlorophyteDye",                needed:   3 },
    ResearchItemDef { id: 2884, name: "UnicornWispDye",                needed:   3 },
    ResearchItemDef { id: 2885, name: "InfernalWispDye",               needed:   3 },
    ResearchItemDef { id: 2886, name: "ViciousPowder",                 needed:  99 },
    ResearchItemDef { id: 2887, name: "ViciousMushroom",               needed:  25 },
    ResearchItemDef { id: 2888, name: "BeesKnees",                     needed:   1 },
    ResearchItemDef { id: 2889, name: "GoldBird",                      needed:   5 },
    ResearchItemDef { id: 2890, name: "GoldBunny",                     needed:   5 },
    ResearchItemDef { id: 2891, name: "GoldButterfly",                 needed:   5 },
    ResearchItemDef { id: 2892, name: "GoldFrog",                      needed:   5 },
    ResearchItemDef { id: 2893, name: "GoldGrasshopper",               needed:   5 },
    ResearchItemDef { id: 2894, name: "GoldMouse",                     needed:   5 },
    ResearchItemDef { id: 2895, name: "GoldWorm",                      needed:   5 },
    ResearchItemDef { id: 2896, name: "StickyDynamite",                needed:  99 },
    ResearchItemDef { id: 2999, name: "BewitchingTable",               needed:   1 },
    ResearchItemDef { id: 3000, name: "AlchemyTable",                  needed:   1 },
    ResearchItemDef { id: 3006, name: "SoulDrain",                     needed:   1 },
    ResearchItemDef { id: 3007, name: "DartPistol",                    needed:   1 },
    ResearchItemDef { id: 3008, name: "DartRifle",                     needed:   1 },
    ResearchItemDef { id: 3009, name: "CrystalDart",                   needed:  99 },
    ResearchItemDef { id: 3010, name: "CursedDart",                    needed:  99 },
    ResearchItemDef { id: 3011, name: "IchorDart",                     needed:  99 },
    ResearchItemDef { id: 3012, name: "ChainGuillotines",              needed:   1 },
    ResearchItemDef { id: 3013, name: "FetidBaghnakhs",                needed:   1 },
    ResearchItemDef { id: 3014, name: "ClingerStaff",                  needed:   1 },
    ResearchItemDef { id: 3015, name: "PutridScent",                   needed:   1 },
    ResearchItemDef { id: 3016, name: "FleshKnuckles",                 needed:   1 },
    ResearchItemDef { id: 3017, name: "FlowerBoots",                   needed:   1 },
    ResearchItemDef { id: 3018, name: "Seedler",                       needed:   1 },
    ResearchItemDef { id: 3019, name: "HellwingBow",                   needed:   1 },
    ResearchItemDef { id: 3020, name: "TendonHook",                    needed:   1 },
    ResearchItemDef { id: 3021, name: "ThornHook",                     needed:   1 },
    ResearchItemDef { id: 3022, name: "IlluminantHook",                needed:   1 },
    ResearchItemDef { id: 3023, name: "WormHook",                      needed:   1 },
    ResearchItemDef { id: 3024, name: "DevDye",                        needed:   3 },
    ResearchItemDef { id: 3025, name: "PurpleOozeDye",                 needed:   3 },
    ResearchItemDef { id: 3026, name: "ReflectiveSilverDye",           needed:   3 },
    ResearchItemDef { id: 3027, name: "ReflectiveGoldDye",             needed:   3 },
    ResearchItemDef { id: 3028, name: "BlueAcidDye",                   needed:   3 },
    ResearchItemDef { id: 3029, name: "DaedalusStormbow",              needed:   1 },
    ResearchItemDef { id: 3030, name: "FlyingKnife",                   needed:   1 },
    ResearchItemDef { id: 3031, name: "BottomlessBucket",              needed:   1 },
    ResearchItemDef { id: 3032, name: "SuperAbsorbantSponge",          needed:   1 },
    ResearchItemDef { id: 3033, name: "GoldRing",                      needed:   1 },
    ResearchItemDef { id: 3034, name: "CoinRing",                      needed:   1 },
    ResearchItemDef { id: 3035, name: "GreedyRing",                    needed:   1 },
    ResearchItemDef { id: 3036, name: "FishFinder",                    needed:   1 },
    ResearchItemDef { id: 3037, name: "WeatherRadio",                  needed:   1 },
    ResearchItemDef { id: 3038, name: "HadesDye",                      needed:   3 },
    ResearchItemDef { id: 3039, name: "TwilightDye",                   needed:   3 },
    ResearchItemDef { id: 3040, name: "AcidDye",                       needed:   3 },
    ResearchItemDef { id: 3041, name: "MushroomDye",                   needed:   3 },
    ResearchItemDef { id: 3042, name: "PhaseDye",                      needed:   3 },
    ResearchItemDef { id: 3043, name: "MagicLantern",                  needed:   1 },
    ResearchItemDef { id: 3045, name: "RainbowTorch",                  needed: 100 },
    ResearchItemDef { id: 3046, name: "CursedCampfire",                needed:   1 },
    ResearchItemDef { id: 3047, name: "DemonCampfire",                 needed:   1 },
    ResearchItemDef { id: 3048, name: "FrozenCampfire",                needed:   1 },
    ResearchItemDef { id: 3049, name: "IchorCampfire",                 needed:   1 },
    ResearchItemDef { id: 3050, name: "RainbowCampfire",               needed:   1 },
    ResearchItemDef { id: 3051, name: "CrystalVileShard",              needed:   1 },
    ResearchItemDef { id: 3052, name: "ShadowFlameBow",                needed:   1 },
    ResearchItemDef { id: 3053, name: "ShadowFlameHexDoll",            needed:   1 },
    ResearchItemDef { id: 3054, name: "ShadowFlameKnife",              needed:   1 },
    ResearchItemDef { id: 3055, name: "PaintingAcorns",                needed:   1 },
    ResearchItemDef { id: 3056, name: "PaintingColdSnap",              needed:   1 },
    ResearchItemDef { id: 3057, name: "PaintingCursedSaint",           needed:   1 },
    ResearchItemDef { id: 3058, name: "PaintingSnowfellas",            needed:   1 },
    ResearchItemDef { id: 3059, name: "PaintingTheSeason",             needed:   1 },
    ResearchItemDef { id: 3060, name: "BoneRattle",                    needed:   1 },
    ResearchItemDef { id: 3061, name: "ArchitectGizmoPack",            needed:   1 },
    ResearchItemDef { id: 3062, name: "CrimsonHeart",                  needed:   1 },
    ResearchItemDef { id: 3063, name: "Meowmere",                      needed:   1 },
    ResearchItemDef { id: 3064, name: "Sundial",                       needed:   1 },
    ResearchItemDef { id: 3065, name: "StarWrath",                     needed:   1 },
    ResearchItemDef { id: 3090, name: "RoyalGel",                      needed:   1 },
    ResearchItemDef { id: 3097, name: "EoCShield",                     needed:   1 },
    ResearchItemDef { id: 3106, name: "PsychoKnife",                   needed:   1 },
    ResearchItemDef { id: 3107, name: "NailGun",                       needed:   1 },
    ResearchItemDef { id: 3108, name: "Nail",                          needed:  99 },
    ResearchItemDef { id: 3203, name: "CorruptFishingCrate",           needed:   5 },
    ResearchItemDef { id: 3204, name: "CrimsonFishingCrate",           needed:   5 },
    ResearchItemDef { id: 3205, name: "DungeonFishingCrate",           needed:   5 },
    ResearchItemDef { id: 3206, name: "FloatingIslandFishingCrate",    needed:   5 },
    ResearchItemDef { id: 3207, name: "HallowedFishingCrate",          needed:   5 },
    ResearchItemDef { id: 3208, name: "JungleFishingCrate",            needed:   5 },
    ResearchItemDef { id: 3262, name: "Code1",                         needed:   1 },
    ResearchItemDef { id: 3278, name: "WoodYoyo",                      needed:   1 },
    ResearchItemDef { id: 3279, name: "CorruptYoyo",                   needed:   1 },
    ResearchItemDef { id: 3280, name: "CrimsonYoyo",                   needed:   1 },
    ResearchItemDef { id: 3281, name: "JungleYoyo",                    needed:   1 },
    ResearchItemDef { id: 3282, name: "Cascade",                       needed:   1 },
    ResearchItemDef { id: 3283, name: "Chik",                          needed:   1 },
    ResearchItemDef { id: 3284, name: "Code2",                         needed:   1 },
    ResearchItemDef { id: 3285, name: "Rally",                         needed:   1 },
    ResearchItemDef { id: 3286, name: "Yelets",                        needed:   1 },
    ResearchItemDef { id: 3287, name: "RedsYoyo",                      needed:   1 },
    ResearchItemDef { id: 3288, name: "ValkyrieYoyo",                  needed:   1 },
    ResearchItemDef { id: 3289, name: "Amarok",                        needed:   1 },
    ResearchItemDef { id: 3290, name: "HelFire",                       needed:   1 },
    ResearchItemDef { id: 3291, name: "Kraken",                        needed:   1 },
    ResearchItemDef { id: 3292, name: "TheEyeOfCthulhu",               needed:   1 },
    ResearchItemDef { id: 3293, name: "RedString",                     needed:   1 },
    ResearchItemDef { id: 3294, name: "OrangeString",                  needed:   1 },
    ResearchItemDef { id: 3295, name: "YellowString",                  needed:   1 },
    ResearchItemDef { id: 3296, name: "LimeString",                    needed:   1 },
    ResearchItemDef { id: 3297, name: "GreenString",                   needed:   1 },
    ResearchItemDef { id: 3298, name: "TealString",                    needed:   1 },
    ResearchItemDef { id: 3299, name: "CyanString",                    needed:   1 },
    ResearchItemDef { id: 3300, name: "SkyBlueString",                 needed:   1 },
    ResearchItemDef { id: 3301, name: "BlueString",                    needed:   1 },
    ResearchItemDef { id: 3302, name: "PurpleString",                  needed:   1 },
    ResearchItemDef { id: 3303, name: "VioletString",                  needed:   1 },
    ResearchItemDef { id: 3304, name: "PinkString",                    needed:   1 },
    ResearchItemDef { id: 3305, name: "BrownString",                   needed:   1 },
    ResearchItemDef { id: 3306, name: "WhiteString",                   needed:   1 },
    ResearchItemDef { id: 3307, name: "RainbowString",                 needed:   1 },
    ResearchItemDef { id: 3308, name: "BlackString",                   needed:   1 },
    ResearchItemDef { id: 3309, name: "BlackCounterweight",            needed:   1 },
    ResearchItemDef { id: 3310, name: "BlueCounterweight",             needed:   1 },
    ResearchItemDef { id: 3311, name: "GreenCounterweight",            needed:   1 },
    ResearchItemDef { id: 3312, name: "PurpleCounterweight",           needed:   1 },
    ResearchItemDef { id: 3313, name: "RedCounterweight",              needed:   1 },
    ResearchItemDef { id: 3314, name: "YellowCounterweight",           needed:   1 },
    ResearchItemDef { id: 3315, name: "FormatC",                       needed:   1 },
    ResearchItemDef { id: 3316, name: "Gradient",                      needed:   1 },
    ResearchItemDef { id: 3317, name: "Valor",                         needed:   1 },
    ResearchItemDef { id: 3318, name: "KingSlimeBossBag",              needed:   3 },
    ResearchItemDef { id: 3319, name: "EyeOfCthulhuBossBag",           needed:   3 },
    ResearchItemDef { id: 3320, name: "EaterOfWorldsBossBag",          needed:   3 },
    ResearchItemDef { id: 3321, name: "BrainOfCthulhuBossBag",         needed:   3 },
    ResearchItemDef { id: 3322, name: "QueenBeeBossBag",               needed:   3 },
    ResearchItemDef { id: 3323, name: "SkeletronBossBag",              needed:   3 },
    ResearchItemDef { id: 3324, name: "WallOfFleshBossBag",            needed:   3 },
    ResearchItemDef { id: 3325, name: "DestroyerBossBag",              needed:   3 },
    ResearchItemDef { id: 3326, name: "TwinsBossBag",                  needed:   3 },
    ResearchItemDef { id: 3327, name: "SkeletronPrimeBossBag",         needed:   3 },
    ResearchItemDef { id: 3328, name: "PlanteraBossBag",               needed:   3 },
    ResearchItemDef { id: 3329, name: "GolemBossBag",                  needed:   3 },
    ResearchItemDef { id: 3330, name: "FishronBossBag",                needed:   3 },
    ResearchItemDef { id: 3331, name: "CultistBossBag",                needed:   3 },
    ResearchItemDef { id: 3332, name: "MoonLordBossBag",               needed:   3 },
    ResearchItemDef { id: 3333, name: "HiveBackpack",                  needed:   1 },
    ResearchItemDef { id: 3334, name: "YoYoGlove",                     needed:   1 },
    ResearchItemDef { id: 3335, name: "DemonHeart",                    needed:   1 },
    ResearchItemDef { id: 3336, name: "SporeSac",                      needed:   1 },
    ResearchItemDef { id: 3337, name: "ShinyStone",                    needed:   1 },
    ResearchItemDef { id: 3384, name: "PortalGun",                     needed:   1 },
    ResearchItemDef { id: 3389, name: "Terrarian",                     needed:   1 },
    ResearchItemDef { id: 3456, name: "FragmentVortex",                needed:  25 },
    ResearchItemDef { id: 3457, name: "FragmentNebula",                needed:  25 },
    ResearchItemDef { id: 3458, name: "FragmentSolar",                 needed:  25 },
    ResearchItemDef { id: 3459, name: "FragmentStardust",              needed:  25 },
    ResearchItemDef { id: 3460, name: "LunarOre",                      needed: 100 },
    ResearchItemDef { id: 3467, name: "LunarBar",                      needed:  25 },
    ResearchItemDef { id: 3473, name: "SolarEruption",                 needed:   1 },
    ResearchItemDef { id: 3474, name: "StardustCellStaff",             needed:   1 },
    ResearchItemDef { id: 3475, name: "VortexBeater",                  needed:   1 },
    ResearchItemDef { id: 3476, name: "NebulaArcanum",                 needed:   1 },
    ResearchItemDef { id: 3480, name: "PlatinumBow",                   needed:   1 },
    ResearchItemDef { id: 3481, name: "PlatinumHammer",                needed:   1 },
    ResearchItemDef { id: 3482, name: "PlatinumAxe",                   needed:   1 },
    ResearchItemDef { id: 3483, name: "PlatinumShortsword",            needed:   1 },
    ResearchItemDef { id: 3484, name: "PlatinumBroadsword",            needed:   1 },
    ResearchItemDef { id: 3485, name: "PlatinumPickaxe",               needed:   1 },
    ResearchItemDef { id: 3486, name: "TungstenBow",                   needed:   1 },
    ResearchItemDef { id: 3487, name: "TungstenHammer",                needed:   1 },
    ResearchItemDef { id: 3488, name: "TungstenAxe",                   needed:   1 },
    ResearchItemDef { id: 3489, name: "TungstenShortsword",            needed:   1 },
    ResearchItemDef { id: 3490, name: "TungstenBroadsword",            needed:   1 },
    ResearchItemDef { id: 3491, name: "TungstenPickaxe",               needed:   1 },
    ResearchItemDef { id: 3492, name: "LeadBow",                       needed:   1 },
    ResearchItemDef { id: 3493, name: "LeadHammer",                    needed:   1 },
    ResearchItemDef { id: 3494, name: "LeadAxe",                       needed:   1 },
    ResearchItemDef { id: 3495, name: "LeadShortsword",                needed:   1 },
    ResearchItemDef { id: 3496, name: "LeadBroadsword",                needed:   1 },
    ResearchItemDef { id: 3497, name: "LeadPickaxe",                   needed:   1 },
    ResearchItemDef { id: 3498, name: "TinBow",                        needed:   1 },
    ResearchItemDef { id: 3499, name: "TinHammer",                     needed:   1 },
    ResearchItemDef { id: 3500, name: "TinAxe",                        needed:   1 },
    ResearchItemDef { id: 3501, name: "TinShortsword",                 needed:   1 },
    ResearchItemDef { id: 3502, name: "TinBroadsword",                 needed:   1 },
    ResearchItemDef { id: 3503, name: "TinPickaxe",                    needed:   1 },
    ResearchItemDef { id: 3504, name: "CopperBow",                     needed:   1 },
    ResearchItemDef { id: 3505, name: "CopperHammer",                  needed:   1 },
    ResearchItemDef { id: 3506, name: "CopperAxe",                     needed:   1 },
    ResearchItemDef { id: 3507, name: "CopperShortsword",              needed:   1 },
    ResearchItemDef { id: 3508, name: "CopperBroadsword",              needed:   1 },
    ResearchItemDef { id: 3509, name: "CopperPickaxe",                 needed:   1 },
    ResearchItemDef { id: 3510, name: "SilverBow",                     needed:   1 },
    ResearchItemDef { id: 3511, name: "SilverHammer",                  needed:   1 },
    ResearchItemDef { id: 3512, name: "SilverAxe",                     needed:   1 },
    ResearchItemDef { id: 3513, name: "SilverShortsword",              needed:   1 },
    ResearchItemDef { id: 3514, name: "SilverBroadsword",              needed:   1 },
    ResearchItemDef { id: 3515, name: "SilverPickaxe",                 needed:   1 },
    ResearchItemDef { id: 3516, name: "GoldBow",                       needed:   1 },
    ResearchItemDef { id: 3517, name: "GoldHammer",                    needed:   1 },
    ResearchItemDef { id: 3518, name: "GoldAxe",                       needed:   1 },
    ResearchItemDef { id: 3519, name: "GoldShortsword",                needed:   1 },
    ResearchItemDef { id: 3520, name: "GoldBroadsword",                needed:   1 },
    ResearchItemDef { id: 3521, name: "GoldPickaxe",                   needed:   1 },
    ResearchItemDef { id: 3522, name: "LunarHamaxeSolar",              needed:   1 },
    ResearchItemDef { id: 3523, name: "LunarHamaxeVortex",             needed:   1 },
    ResearchItemDef { id: 3524, name: "LunarHamaxeNebula",             needed:   1 },
    ResearchItemDef { id: 3525, name: "LunarHamaxeStardust",           needed:   1 },
    ResearchItemDef { id: 3526, name: "SolarDye",                      needed:   3 },
    ResearchItemDef { id: 3527, name: "NebulaDye",                     needed:   3 },
    ResearchItemDef { id: 3528, name: "VortexDye",                     needed:   3 },
    ResearchItemDef { id: 3529, name: "StardustDye",                   needed:   3 },
    ResearchItemDef { id: 3530, name: "VoidDye",                       needed:   3 },
    ResearchItemDef { id: 3531, name: "StardustDragonStaff",           needed:   1 },
    ResearchItemDef { id: 3541, name: "LastPrism",                     needed:   1 },
    ResearchItemDef { id: 3542, name: "NebulaBlaze",                   needed:   1 },
    ResearchItemDef { id: 3543, name: "DayBreak",                      needed:   1 },
    ResearchItemDef { id: 3544, name: "SuperHealingPotion",            needed:  20 },
    ResearchItemDef { id: 3545, name: "Detonator",                     needed:   1 },
    ResearchItemDef { id: 3546, name: "FireworksLauncher",             needed:   1 },
    ResearchItemDef { id: 3547, name: "BouncyDynamite",                needed:  99 },
    ResearchItemDef { id: 3548, name: "PartyGirlGrenade",              needed:  99 },
    ResearchItemDef { id: 3549, name: "LunarCraftingStation",          needed:   1 },
    ResearchItemDef { id: 3567, name: "MoonlordBullet",                needed:  99 },
    ResearchItemDef { id: 3568, name: "MoonlordArrow",                 needed:  99 },
    ResearchItemDef { id: 3569, name: "MoonlordTurretStaff",           needed:   1 },
    ResearchItemDef { id: 3570, name: "LunarFlareBook",                needed:   1 },
    ResearchItemDef { id: 3571, name: "RainbowCrystalStaff",           needed:   1 },
    ResearchItemDef { id: 3601, name: "CelestialSigil",                needed:   1 },
    ResearchItemDef { id: 3611, name: "WireKite",                      needed:   1 },
    ResearchItemDef { id: 3776, name: "CrystalNinjaHelmet",            needed:   1 },
    ResearchItemDef { id: 3777, name: "CrystalNinjaChestplate",        needed:   1 },
    ResearchItemDef { id: 3778, name: "CrystalNinjaLeggings",          needed:   1 },
    ResearchItemDef { id: 4923, name: "PiercingStarlight",             needed:   1 },
    ResearchItemDef { id: 4952, name: "FairyQueenMagicItem",           needed:   1 },
    ResearchItemDef { id: 4953, name: "FairyQueenRangedItem",          needed:   1 },
    ResearchItemDef { id: 4956, name: "Zenith",                        needed:   1 },
    ResearchItemDef { id: 5005, name: "EmpressBlade",                  needed:   1 },
];
