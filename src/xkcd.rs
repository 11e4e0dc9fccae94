//! Color names from the xkcd color survey.
//!
//! These names are accepted as input only. A color is never displayed with an
//! xkcd name.

/// xkcd color names with their 6 digit hex value, sorted by name.
#[rustfmt::skip]
static XKCD_COLORS: &[(&str, &str)] = &[
    ("acid_green", "#8ffe09"),
    ("adobe", "#bd6c48"),
    ("algae", "#54ac68"),
    ("algae_green", "#21c36f"),
    ("almost_black", "#070d0d"),
    ("amber", "#feb308"),
    ("amethyst", "#9b5fc0"),
    ("apple", "#6ecb3c"),
    ("apple_green", "#76cd26"),
    ("apricot", "#ffb16d"),
    ("aqua", "#13eac9"),
    ("aqua_blue", "#02d8e9"),
    ("aqua_green", "#12e193"),
    ("aqua_marine", "#2ee8bb"),
    ("aquamarine", "#04d8b2"),
    ("army_green", "#4b5d16"),
    ("asparagus", "#77ab56"),
    ("aubergine", "#3d0734"),
    ("auburn", "#9a3001"),
    ("avocado", "#90b134"),
    ("avocado_green", "#87a922"),
    ("azul", "#1d5dec"),
    ("azure", "#069af3"),
    ("baby_blue", "#a2cffe"),
    ("baby_green", "#8cff9e"),
    ("baby_pink", "#ffb7ce"),
    ("baby_poo", "#ab9004"),
    ("baby_poop", "#937c00"),
    ("baby_poop_green", "#8f9805"),
    ("baby_puke_green", "#b6c406"),
    ("baby_purple", "#ca9bf7"),
    ("baby_shit_brown", "#ad900d"),
    ("baby_shit_green", "#889717"),
    ("banana", "#ffff7e"),
    ("banana_yellow", "#fafe4b"),
    ("barbie_pink", "#fe46a5"),
    ("barf_green", "#94ac02"),
    ("barney", "#ac1db8"),
    ("barney_purple", "#a00498"),
    ("battleship_grey", "#6b7c85"),
    ("beige", "#e6daa6"),
    ("berry", "#990f4b"),
    ("bile", "#b5c306"),
    ("black", "#000000"),
    ("bland", "#afa88b"),
    ("blood", "#770001"),
    ("blood_orange", "#fe4b03"),
    ("blood_red", "#980002"),
    ("blue", "#0343df"),
    ("blue/green", "#0f9b8e"),
    ("blue/grey", "#758da3"),
    ("blue/purple", "#5a06ef"),
    ("blue_blue", "#2242c7"),
    ("blue_green", "#137e6d"),
    ("blue_grey", "#607c8e"),
    ("blue_purple", "#5729ce"),
    ("blue_violet", "#5d06e9"),
    ("blue_with_a_hint_of_purple", "#533cc6"),
    ("blueberry", "#464196"),
    ("bluegreen", "#017a79"),
    ("bluegrey", "#85a3b2"),
    ("bluey_green", "#2bb179"),
    ("bluey_grey", "#89a0b0"),
    ("bluey_purple", "#6241c7"),
    ("bluish", "#2976bb"),
    ("bluish_green", "#10a674"),
    ("bluish_grey", "#748b97"),
    ("bluish_purple", "#703be7"),
    ("blurple", "#5539cc"),
    ("blush", "#f29e8e"),
    ("blush_pink", "#fe828c"),
    ("booger", "#9bb53c"),
    ("booger_green", "#96b403"),
    ("bordeaux", "#7b002c"),
    ("boring_green", "#63b365"),
    ("bottle_green", "#044a05"),
    ("brick", "#a03623"),
    ("brick_orange", "#c14a09"),
    ("brick_red", "#8f1402"),
    ("bright_aqua", "#0bf9ea"),
    ("bright_blue", "#0165fc"),
    ("bright_cyan", "#41fdfe"),
    ("bright_green", "#01ff07"),
    ("bright_lavender", "#c760ff"),
    ("bright_light_blue", "#26f7fd"),
    ("bright_light_green", "#2dfe54"),
    ("bright_lilac", "#c95efb"),
    ("bright_lime", "#87fd05"),
    ("bright_lime_green", "#65fe08"),
    ("bright_magenta", "#ff08e8"),
    ("bright_olive", "#9cbb04"),
    ("bright_orange", "#ff5b00"),
    ("bright_pink", "#fe01b1"),
    ("bright_purple", "#be03fd"),
    ("bright_red", "#ff000d"),
    ("bright_sea_green", "#05ffa6"),
    ("bright_sky_blue", "#02ccfe"),
    ("bright_teal", "#01f9c6"),
    ("bright_turquoise", "#0ffef9"),
    ("bright_violet", "#ad0afd"),
    ("bright_yellow", "#fffd01"),
    ("bright_yellow_green", "#9dff00"),
    ("british_racing_green", "#05480d"),
    ("bronze", "#a87900"),
    ("brown", "#653700"),
    ("brown_green", "#706c11"),
    ("brown_grey", "#8d8468"),
    ("brown_orange", "#b96902"),
    ("brown_red", "#922b05"),
    ("brown_yellow", "#b29705"),
    ("brownish", "#9c6d57"),
    ("brownish_green", "#6a6e09"),
    ("brownish_grey", "#86775f"),
    ("brownish_orange", "#cb7723"),
    ("brownish_pink", "#c27e79"),
    ("brownish_purple", "#76424e"),
    ("brownish_red", "#9e3623"),
    ("brownish_yellow", "#c9b003"),
    ("browny_green", "#6f6c0a"),
    ("browny_orange", "#ca6b02"),
    ("bruise", "#7e4071"),
    ("bubble_gum_pink", "#ff69af"),
    ("bubblegum", "#ff6cb5"),
    ("bubblegum_pink", "#fe83cc"),
    ("buff", "#fef69e"),
    ("burgundy", "#610023"),
    ("burnt_orange", "#c04e01"),
    ("burnt_red", "#9f2305"),
    ("burnt_siena", "#b75203"),
    ("burnt_sienna", "#b04e0f"),
    ("burnt_umber", "#a0450e"),
    ("burnt_yellow", "#d5ab09"),
    ("burple", "#6832e3"),
    ("butter", "#ffff81"),
    ("butter_yellow", "#fffd74"),
    ("butterscotch", "#fdb147"),
    ("cadet_blue", "#4e7496"),
    ("camel", "#c69f59"),
    ("camo", "#7f8f4e"),
    ("camo_green", "#526525"),
    ("camouflage_green", "#4b6113"),
    ("canary", "#fdff63"),
    ("canary_yellow", "#fffe40"),
    ("candy_pink", "#ff63e9"),
    ("caramel", "#af6f09"),
    ("carmine", "#9d0216"),
    ("carnation", "#fd798f"),
    ("carnation_pink", "#ff7fa7"),
    ("carolina_blue", "#8ab8fe"),
    ("celadon", "#befdb7"),
    ("celery", "#c1fd95"),
    ("cement", "#a5a391"),
    ("cerise", "#de0c62"),
    ("cerulean", "#0485d1"),
    ("cerulean_blue", "#056eee"),
    ("charcoal", "#343837"),
    ("charcoal_grey", "#3c4142"),
    ("chartreuse", "#c1f80a"),
    ("cherry", "#cf0234"),
    ("cherry_red", "#f7022a"),
    ("chestnut", "#742802"),
    ("chocolate", "#3d1c02"),
    ("chocolate_brown", "#411900"),
    ("cinnamon", "#ac4f06"),
    ("claret", "#680018"),
    ("clay", "#b66a50"),
    ("clay_brown", "#b2713d"),
    ("clear_blue", "#247afd"),
    ("cloudy_blue", "#acc2d9"),
    ("cobalt", "#1e488f"),
    ("cobalt_blue", "#030aa7"),
    ("cocoa", "#875f42"),
    ("coffee", "#a6814c"),
    ("cool_blue", "#4984b8"),
    ("cool_green", "#33b864"),
    ("cool_grey", "#95a3a6"),
    ("copper", "#b66325"),
    ("coral", "#fc5a50"),
    ("coral_pink", "#ff6163"),
    ("cornflower", "#6a79f7"),
    ("cornflower_blue", "#5170d7"),
    ("cranberry", "#9e003a"),
    ("cream", "#ffffc2"),
    ("creme", "#ffffb6"),
    ("crimson", "#8c000f"),
    ("custard", "#fffd78"),
    ("cyan", "#00ffff"),
    ("dandelion", "#fedf08"),
    ("dark", "#1b2431"),
    ("dark_aqua", "#05696b"),
    ("dark_aquamarine", "#017371"),
    ("dark_beige", "#ac9362"),
    ("dark_blue", "#00035b"),
    ("dark_blue_green", "#005249"),
    ("dark_blue_grey", "#1f3b4d"),
    ("dark_brown", "#341c02"),
    ("dark_coral", "#cf524e"),
    ("dark_cream", "#fff39a"),
    ("dark_cyan", "#0a888a"),
    ("dark_forest_green", "#002d04"),
    ("dark_fuchsia", "#9d0759"),
    ("dark_gold", "#b59410"),
    ("dark_grass_green", "#388004"),
    ("dark_green", "#033500"),
    ("dark_green_blue", "#1f6357"),
    ("dark_grey", "#363737"),
    ("dark_grey_blue", "#29465b"),
    ("dark_hot_pink", "#d90166"),
    ("dark_indigo", "#1f0954"),
    ("dark_khaki", "#9b8f55"),
    ("dark_lavender", "#856798"),
    ("dark_lilac", "#9c6da5"),
    ("dark_lime", "#84b701"),
    ("dark_lime_green", "#7ebd01"),
    ("dark_magenta", "#960056"),
    ("dark_maroon", "#3c0008"),
    ("dark_mauve", "#874c62"),
    ("dark_mint", "#48c072"),
    ("dark_mint_green", "#20c073"),
    ("dark_mustard", "#a88905"),
    ("dark_navy", "#000435"),
    ("dark_navy_blue", "#00022e"),
    ("dark_olive", "#373e02"),
    ("dark_olive_green", "#3c4d03"),
    ("dark_orange", "#c65102"),
    ("dark_pastel_green", "#56ae57"),
    ("dark_peach", "#de7e5d"),
    ("dark_periwinkle", "#665fd1"),
    ("dark_pink", "#cb416b"),
    ("dark_plum", "#3f012c"),
    ("dark_purple", "#35063e"),
    ("dark_red", "#840000"),
    ("dark_rose", "#b5485d"),
    ("dark_royal_blue", "#02066f"),
    ("dark_sage", "#598556"),
    ("dark_salmon", "#c85a53"),
    ("dark_sand", "#a88f59"),
    ("dark_sea_green", "#11875d"),
    ("dark_seafoam", "#1fb57a"),
    ("dark_seafoam_green", "#3eaf76"),
    ("dark_sky_blue", "#448ee4"),
    ("dark_slate_blue", "#214761"),
    ("dark_tan", "#af884a"),
    ("dark_taupe", "#7f684e"),
    ("dark_teal", "#014d4e"),
    ("dark_turquoise", "#045c5a"),
    ("dark_violet", "#34013f"),
    ("dark_yellow", "#d5b60a"),
    ("dark_yellow_green", "#728f02"),
    ("darkblue", "#030764"),
    ("darkgreen", "#054907"),
    ("darkish_blue", "#014182"),
    ("darkish_green", "#287c37"),
    ("darkish_pink", "#da467d"),
    ("darkish_purple", "#751973"),
    ("darkish_red", "#a90308"),
    ("deep_aqua", "#08787f"),
    ("deep_blue", "#040273"),
    ("deep_brown", "#410200"),
    ("deep_green", "#02590f"),
    ("deep_lavender", "#8d5eb7"),
    ("deep_lilac", "#966ebd"),
    ("deep_magenta", "#a0025c"),
    ("deep_orange", "#dc4d01"),
    ("deep_pink", "#cb0162"),
    ("deep_purple", "#36013f"),
    ("deep_red", "#9a0200"),
    ("deep_rose", "#c74767"),
    ("deep_sea_blue", "#015482"),
    ("deep_sky_blue", "#0d75f8"),
    ("deep_teal", "#00555a"),
    ("deep_turquoise", "#017374"),
    ("deep_violet", "#490648"),
    ("denim", "#3b638c"),
    ("denim_blue", "#3b5b92"),
    ("desert", "#ccad60"),
    ("diarrhea", "#9f8303"),
    ("dirt", "#8a6e45"),
    ("dirt_brown", "#836539"),
    ("dirty_blue", "#3f829d"),
    ("dirty_green", "#667e2c"),
    ("dirty_orange", "#c87606"),
    ("dirty_pink", "#ca7b80"),
    ("dirty_purple", "#734a65"),
    ("dirty_yellow", "#cdc50a"),
    ("dodger_blue", "#3e82fc"),
    ("drab", "#828344"),
    ("drab_green", "#749551"),
    ("dried_blood", "#4b0101"),
    ("duck_egg_blue", "#c3fbf4"),
    ("dull_blue", "#49759c"),
    ("dull_brown", "#876e4b"),
    ("dull_green", "#74a662"),
    ("dull_orange", "#d8863b"),
    ("dull_pink", "#d5869d"),
    ("dull_purple", "#84597e"),
    ("dull_red", "#bb3f3f"),
    ("dull_teal", "#5f9e8f"),
    ("dull_yellow", "#eedc5b"),
    ("dusk", "#4e5481"),
    ("dusk_blue", "#26538d"),
    ("dusky_blue", "#475f94"),
    ("dusky_pink", "#cc7a8b"),
    ("dusky_purple", "#895b7b"),
    ("dusky_rose", "#ba6873"),
    ("dust", "#b2996e"),
    ("dusty_blue", "#5a86ad"),
    ("dusty_green", "#76a973"),
    ("dusty_lavender", "#ac86a8"),
    ("dusty_orange", "#f0833a"),
    ("dusty_pink", "#d58a94"),
    ("dusty_purple", "#825f87"),
    ("dusty_red", "#b9484e"),
    ("dusty_rose", "#c0737a"),
    ("dusty_teal", "#4c9085"),
    ("earth", "#a2653e"),
    ("easter_green", "#8cfd7e"),
    ("easter_purple", "#c071fe"),
    ("ecru", "#feffca"),
    ("egg_shell", "#fffcc4"),
    ("eggplant", "#380835"),
    ("eggplant_purple", "#430541"),
    ("eggshell", "#ffffd4"),
    ("eggshell_blue", "#c4fff7"),
    ("electric_blue", "#0652ff"),
    ("electric_green", "#21fc0d"),
    ("electric_lime", "#a8ff04"),
    ("electric_pink", "#ff0490"),
    ("electric_purple", "#aa23ff"),
    ("emerald", "#01a049"),
    ("emerald_green", "#028f1e"),
    ("evergreen", "#05472a"),
    ("faded_blue", "#658cbb"),
    ("faded_green", "#7bb274"),
    ("faded_orange", "#f0944d"),
    ("faded_pink", "#de9dac"),
    ("faded_purple", "#916e99"),
    ("faded_red", "#d3494e"),
    ("faded_yellow", "#feff7f"),
    ("fawn", "#cfaf7b"),
    ("fern", "#63a950"),
    ("fern_green", "#548d44"),
    ("fire_engine_red", "#fe0002"),
    ("flat_blue", "#3c73a8"),
    ("flat_green", "#699d4c"),
    ("fluorescent_green", "#08ff08"),
    ("fluro_green", "#0aff02"),
    ("foam_green", "#90fda9"),
    ("forest", "#0b5509"),
    ("forest_green", "#06470c"),
    ("forrest_green", "#154406"),
    ("french_blue", "#436bad"),
    ("fresh_green", "#69d84f"),
    ("frog_green", "#58bc08"),
    ("fuchsia", "#ed0dd9"),
    ("gold", "#dbb40c"),
    ("golden", "#f5bf03"),
    ("golden_brown", "#b27a01"),
    ("golden_rod", "#f9bc08"),
    ("golden_yellow", "#fec615"),
    ("goldenrod", "#fac205"),
    ("grape", "#6c3461"),
    ("grape_purple", "#5d1451"),
    ("grapefruit", "#fd5956"),
    ("grass", "#5cac2d"),
    ("grass_green", "#3f9b0b"),
    ("grassy_green", "#419c03"),
    ("green", "#15b01a"),
    ("green/blue", "#01c08d"),
    ("green/yellow", "#b5ce08"),
    ("green_apple", "#5edc1f"),
    ("green_blue", "#06b48b"),
    ("green_brown", "#544e03"),
    ("green_grey", "#77926f"),
    ("green_teal", "#0cb577"),
    ("green_yellow", "#c9ff27"),
    ("greenblue", "#23c48b"),
    ("greenish", "#40a368"),
    ("greenish_beige", "#c9d179"),
    ("greenish_blue", "#0b8b87"),
    ("greenish_brown", "#696112"),
    ("greenish_cyan", "#2afeb7"),
    ("greenish_grey", "#96ae8d"),
    ("greenish_tan", "#bccb7a"),
    ("greenish_teal", "#32bf84"),
    ("greenish_turquoise", "#00fbb0"),
    ("greenish_yellow", "#cdfd02"),
    ("greeny_blue", "#42b395"),
    ("greeny_brown", "#696006"),
    ("greeny_grey", "#7ea07a"),
    ("greeny_yellow", "#c6f808"),
    ("grey", "#929591"),
    ("grey/blue", "#647d8e"),
    ("grey/green", "#86a17d"),
    ("grey_blue", "#6b8ba4"),
    ("grey_brown", "#7f7053"),
    ("grey_green", "#789b73"),
    ("grey_pink", "#c3909b"),
    ("grey_purple", "#826d8c"),
    ("grey_teal", "#5e9b8a"),
    ("greyblue", "#77a1b5"),
    ("greyish", "#a8a495"),
    ("greyish_blue", "#5e819d"),
    ("greyish_brown", "#7a6a4f"),
    ("greyish_green", "#82a67d"),
    ("greyish_pink", "#c88d94"),
    ("greyish_purple", "#887191"),
    ("greyish_teal", "#719f91"),
    ("gross_green", "#a0bf16"),
    ("gunmetal", "#536267"),
    ("hazel", "#8e7618"),
    ("heather", "#a484ac"),
    ("heliotrope", "#d94ff5"),
    ("highlighter_green", "#1bfc06"),
    ("hospital_green", "#9be5aa"),
    ("hot_green", "#25ff29"),
    ("hot_magenta", "#f504c9"),
    ("hot_pink", "#ff028d"),
    ("hot_purple", "#cb00f5"),
    ("hunter_green", "#0b4008"),
    ("ice", "#d6fffa"),
    ("ice_blue", "#d7fffe"),
    ("icky_green", "#8fae22"),
    ("indian_red", "#850e04"),
    ("indigo", "#380282"),
    ("indigo_blue", "#3a18b1"),
    ("iris", "#6258c4"),
    ("irish_green", "#019529"),
    ("ivory", "#ffffcb"),
    ("jade", "#1fa774"),
    ("jade_green", "#2baf6a"),
    ("jungle_green", "#048243"),
    ("kelley_green", "#009337"),
    ("kelly_green", "#02ab2e"),
    ("kermit_green", "#5cb200"),
    ("key_lime", "#aeff6e"),
    ("khaki", "#aaa662"),
    ("khaki_green", "#728639"),
    ("kiwi", "#9cef43"),
    ("kiwi_green", "#8ee53f"),
    ("lavender", "#c79fef"),
    ("lavender_blue", "#8b88f8"),
    ("lavender_pink", "#dd85d7"),
    ("lawn_green", "#4da409"),
    ("leaf", "#71aa34"),
    ("leaf_green", "#5ca904"),
    ("leafy_green", "#51b73b"),
    ("leather", "#ac7434"),
    ("lemon", "#fdff52"),
    ("lemon_green", "#adf802"),
    ("lemon_lime", "#bffe28"),
    ("lemon_yellow", "#fdff38"),
    ("lichen", "#8fb67b"),
    ("light_aqua", "#8cffdb"),
    ("light_aquamarine", "#7bfdc7"),
    ("light_beige", "#fffeb6"),
    ("light_blue", "#95d0fc"),
    ("light_blue_green", "#7efbb3"),
    ("light_blue_grey", "#b7c9e2"),
    ("light_bluish_green", "#76fda8"),
    ("light_bright_green", "#53fe5c"),
    ("light_brown", "#ad8150"),
    ("light_burgundy", "#a8415b"),
    ("light_cyan", "#acfffc"),
    ("light_eggplant", "#894585"),
    ("light_forest_green", "#4f9153"),
    ("light_gold", "#fddc5c"),
    ("light_grass_green", "#9af764"),
    ("light_green", "#96f97b"),
    ("light_green_blue", "#56fca2"),
    ("light_greenish_blue", "#63f7b4"),
    ("light_grey", "#d8dcd6"),
    ("light_grey_blue", "#9dbcd4"),
    ("light_grey_green", "#b7e1a1"),
    ("light_indigo", "#6d5acf"),
    ("light_khaki", "#e6f2a2"),
    ("light_lavendar", "#efc0fe"),
    ("light_lavender", "#dfc5fe"),
    ("light_light_blue", "#cafffb"),
    ("light_light_green", "#c8ffb0"),
    ("light_lilac", "#edc8ff"),
    ("light_lime", "#aefd6c"),
    ("light_lime_green", "#b9ff66"),
    ("light_magenta", "#fa5ff7"),
    ("light_maroon", "#a24857"),
    ("light_mauve", "#c292a1"),
    ("light_mint", "#b6ffbb"),
    ("light_mint_green", "#a6fbb2"),
    ("light_moss_green", "#a6c875"),
    ("light_mustard", "#f7d560"),
    ("light_navy", "#155084"),
    ("light_navy_blue", "#2e5a88"),
    ("light_neon_green", "#4efd54"),
    ("light_olive", "#acbf69"),
    ("light_olive_green", "#a4be5c"),
    ("light_orange", "#fdaa48"),
    ("light_pastel_green", "#b2fba5"),
    ("light_pea_green", "#c4fe82"),
    ("light_peach", "#ffd8b1"),
    ("light_periwinkle", "#c1c6fc"),
    ("light_pink", "#ffd1df"),
    ("light_plum", "#9d5783"),
    ("light_purple", "#bf77f6"),
    ("light_red", "#ff474c"),
    ("light_rose", "#ffc5cb"),
    ("light_royal_blue", "#3a2efe"),
    ("light_sage", "#bcecac"),
    ("light_salmon", "#fea993"),
    ("light_sea_green", "#98f6b0"),
    ("light_seafoam", "#a0febf"),
    ("light_seafoam_green", "#a7ffb5"),
    ("light_sky_blue", "#c6fcff"),
    ("light_tan", "#fbeeac"),
    ("light_teal", "#90e4c1"),
    ("light_turquoise", "#7ef4cc"),
    ("light_urple", "#b36ff6"),
    ("light_violet", "#d6b4fc"),
    ("light_yellow", "#fffe7a"),
    ("light_yellow_green", "#ccfd7f"),
    ("light_yellowish_green", "#c2ff89"),
    ("lightblue", "#7bc8f6"),
    ("lighter_green", "#75fd63"),
    ("lighter_purple", "#a55af4"),
    ("lightgreen", "#76ff7b"),
    ("lightish_blue", "#3d7afd"),
    ("lightish_green", "#61e160"),
    ("lightish_purple", "#a552e6"),
    ("lightish_red", "#fe2f4a"),
    ("lilac", "#cea2fd"),
    ("liliac", "#c48efd"),
    ("lime", "#aaff32"),
    ("lime_green", "#89fe05"),
    ("lime_yellow", "#d0fe1d"),
    ("lipstick", "#d5174e"),
    ("lipstick_red", "#c0022f"),
    ("macaroni_and_cheese", "#efb435"),
    ("magenta", "#c20078"),
    ("mahogany", "#4a0100"),
    ("maize", "#f4d054"),
    ("mango", "#ffa62b"),
    ("manilla", "#fffa86"),
    ("marigold", "#fcc006"),
    ("marine", "#042e60"),
    ("marine_blue", "#01386a"),
    ("maroon", "#650021"),
    ("mauve", "#ae7181"),
    ("medium_blue", "#2c6fbb"),
    ("medium_brown", "#7f5112"),
    ("medium_green", "#39ad48"),
    ("medium_grey", "#7d7f7c"),
    ("medium_pink", "#f36196"),
    ("medium_purple", "#9e43a2"),
    ("melon", "#ff7855"),
    ("merlot", "#730039"),
    ("metallic_blue", "#4f738e"),
    ("mid_blue", "#276ab3"),
    ("mid_green", "#50a747"),
    ("midnight", "#03012d"),
    ("midnight_blue", "#020035"),
    ("midnight_purple", "#280137"),
    ("military_green", "#667c3e"),
    ("milk_chocolate", "#7f4e1e"),
    ("mint", "#9ffeb0"),
    ("mint_green", "#8fff9f"),
    ("minty_green", "#0bf77d"),
    ("mocha", "#9d7651"),
    ("moss", "#769958"),
    ("moss_green", "#658b38"),
    ("mossy_green", "#638b27"),
    ("mud", "#735c12"),
    ("mud_brown", "#60460f"),
    ("mud_green", "#606602"),
    ("muddy_brown", "#886806"),
    ("muddy_green", "#657432"),
    ("muddy_yellow", "#bfac05"),
    ("mulberry", "#920a4e"),
    ("murky_green", "#6c7a0e"),
    ("mushroom", "#ba9e88"),
    ("mustard", "#ceb301"),
    ("mustard_brown", "#ac7e04"),
    ("mustard_green", "#a8b504"),
    ("mustard_yellow", "#d2bd0a"),
    ("muted_blue", "#3b719f"),
    ("muted_green", "#5fa052"),
    ("muted_pink", "#d1768f"),
    ("muted_purple", "#805b87"),
    ("nasty_green", "#70b23f"),
    ("navy", "#01153e"),
    ("navy_blue", "#001146"),
    ("navy_green", "#35530a"),
    ("neon_blue", "#04d9ff"),
    ("neon_green", "#0cff0c"),
    ("neon_pink", "#fe019a"),
    ("neon_purple", "#bc13fe"),
    ("neon_red", "#ff073a"),
    ("neon_yellow", "#cfff04"),
    ("nice_blue", "#107ab0"),
    ("night_blue", "#040348"),
    ("ocean", "#017b92"),
    ("ocean_blue", "#03719c"),
    ("ocean_green", "#3d9973"),
    ("ocher", "#bf9b0c"),
    ("ochre", "#bf9005"),
    ("ocre", "#c69c04"),
    ("off_blue", "#5684ae"),
    ("off_green", "#6ba353"),
    ("off_white", "#ffffe4"),
    ("off_yellow", "#f1f33f"),
    ("old_pink", "#c77986"),
    ("old_rose", "#c87f89"),
    ("olive", "#6e750e"),
    ("olive_brown", "#645403"),
    ("olive_drab", "#6f7632"),
    ("olive_green", "#677a04"),
    ("olive_yellow", "#c2b709"),
    ("orange", "#f97306"),
    ("orange_brown", "#be6400"),
    ("orange_pink", "#ff6f52"),
    ("orange_red", "#fd411e"),
    ("orange_yellow", "#ffad01"),
    ("orangeish", "#fd8d49"),
    ("orangered", "#fe420f"),
    ("orangey_brown", "#b16002"),
    ("orangey_red", "#fa4224"),
    ("orangey_yellow", "#fdb915"),
    ("orangish", "#fc824a"),
    ("orangish_brown", "#b25f03"),
    ("orangish_red", "#f43605"),
    ("orchid", "#c875c4"),
    ("pale", "#fff9d0"),
    ("pale_aqua", "#b8ffeb"),
    ("pale_blue", "#d0fefe"),
    ("pale_brown", "#b1916e"),
    ("pale_cyan", "#b7fffa"),
    ("pale_gold", "#fdde6c"),
    ("pale_green", "#c7fdb5"),
    ("pale_grey", "#fdfdfe"),
    ("pale_lavender", "#eecffe"),
    ("pale_light_green", "#b1fc99"),
    ("pale_lilac", "#e4cbff"),
    ("pale_lime", "#befd73"),
    ("pale_lime_green", "#b1ff65"),
    ("pale_magenta", "#d767ad"),
    ("pale_mauve", "#fed0fc"),
    ("pale_olive", "#b9cc81"),
    ("pale_olive_green", "#b1d27b"),
    ("pale_orange", "#ffa756"),
    ("pale_peach", "#ffe5ad"),
    ("pale_pink", "#ffcfdc"),
    ("pale_purple", "#b790d4"),
    ("pale_red", "#d9544d"),
    ("pale_rose", "#fdc1c5"),
    ("pale_salmon", "#ffb19a"),
    ("pale_sky_blue", "#bdf6fe"),
    ("pale_teal", "#82cbb2"),
    ("pale_turquoise", "#a5fbd5"),
    ("pale_violet", "#ceaefa"),
    ("pale_yellow", "#ffff84"),
    ("parchment", "#fefcaf"),
    ("pastel_blue", "#a2bffe"),
    ("pastel_green", "#b0ff9d"),
    ("pastel_orange", "#ff964f"),
    ("pastel_pink", "#ffbacd"),
    ("pastel_purple", "#caa0ff"),
    ("pastel_red", "#db5856"),
    ("pastel_yellow", "#fffe71"),
    ("pea", "#a4bf20"),
    ("pea_green", "#8eab12"),
    ("pea_soup", "#929901"),
    ("pea_soup_green", "#94a617"),
    ("peach", "#ffb07c"),
    ("peachy_pink", "#ff9a8a"),
    ("peacock_blue", "#016795"),
    ("pear", "#cbf85f"),
    ("periwinkle", "#8e82fe"),
    ("periwinkle_blue", "#8f99fb"),
    ("perrywinkle", "#8f8ce7"),
    ("petrol", "#005f6a"),
    ("pig_pink", "#e78ea5"),
    ("pine", "#2b5d34"),
    ("pine_green", "#0a481e"),
    ("pink", "#ff81c0"),
    ("pink/purple", "#ef1de7"),
    ("pink_purple", "#db4bda"),
    ("pink_red", "#f5054f"),
    ("pinkish", "#d46a7e"),
    ("pinkish_brown", "#b17261"),
    ("pinkish_grey", "#c8aca9"),
    ("pinkish_orange", "#ff724c"),
    ("pinkish_purple", "#d648d7"),
    ("pinkish_red", "#f10c45"),
    ("pinkish_tan", "#d99b82"),
    ("pinky", "#fc86aa"),
    ("pinky_purple", "#c94cbe"),
    ("pinky_red", "#fc2647"),
    ("piss_yellow", "#ddd618"),
    ("pistachio", "#c0fa8b"),
    ("plum", "#580f41"),
    ("plum_purple", "#4e0550"),
    ("poison_green", "#40fd14"),
    ("poo", "#8f7303"),
    ("poo_brown", "#885f01"),
    ("poop", "#7f5e00"),
    ("poop_brown", "#7a5901"),
    ("poop_green", "#6f7c00"),
    ("powder_blue", "#b1d1fc"),
    ("powder_pink", "#ffb2d0"),
    ("primary_blue", "#0804f9"),
    ("prussian_blue", "#004577"),
    ("puce", "#a57e52"),
    ("puke", "#a5a502"),
    ("puke_brown", "#947706"),
    ("puke_green", "#9aae07"),
    ("puke_yellow", "#c2be0e"),
    ("pumpkin", "#e17701"),
    ("pumpkin_orange", "#fb7d07"),
    ("pure_blue", "#0203e2"),
    ("purple", "#7e1e9c"),
    ("purple/blue", "#5d21d0"),
    ("purple/pink", "#d725de"),
    ("purple_blue", "#632de9"),
    ("purple_brown", "#673a3f"),
    ("purple_grey", "#866f85"),
    ("purple_pink", "#e03fd8"),
    ("purple_red", "#990147"),
    ("purpleish", "#98568d"),
    ("purpleish_blue", "#6140ef"),
    ("purpleish_pink", "#df4ec8"),
    ("purpley", "#8756e4"),
    ("purpley_blue", "#5f34e7"),
    ("purpley_grey", "#947e94"),
    ("purpley_pink", "#c83cb9"),
    ("purplish", "#94568c"),
    ("purplish_blue", "#601ef9"),
    ("purplish_brown", "#6b4247"),
    ("purplish_grey", "#7a687f"),
    ("purplish_pink", "#ce5dae"),
    ("purplish_red", "#b0054b"),
    ("purply", "#983fb2"),
    ("purply_blue", "#661aee"),
    ("purply_pink", "#f075e6"),
    ("putty", "#beae8a"),
    ("racing_green", "#014600"),
    ("radioactive_green", "#2cfa1f"),
    ("raspberry", "#b00149"),
    ("raw_sienna", "#9a6200"),
    ("raw_umber", "#a75e09"),
    ("really_light_blue", "#d4ffff"),
    ("red", "#e50000"),
    ("red_brown", "#8b2e16"),
    ("red_orange", "#fd3c06"),
    ("red_pink", "#fa2a55"),
    ("red_purple", "#820747"),
    ("red_violet", "#9e0168"),
    ("red_wine", "#8c0034"),
    ("reddish", "#c44240"),
    ("reddish_brown", "#7f2b0a"),
    ("reddish_grey", "#997570"),
    ("reddish_orange", "#f8481c"),
    ("reddish_pink", "#fe2c54"),
    ("reddish_purple", "#910951"),
    ("reddy_brown", "#6e1005"),
    ("rich_blue", "#021bf9"),
    ("rich_purple", "#720058"),
    ("robin_egg_blue", "#8af1fe"),
    ("robin_s_egg", "#6dedfd"),
    ("robin_s_egg_blue", "#98eff9"),
    ("rosa", "#fe86a4"),
    ("rose", "#cf6275"),
    ("rose_pink", "#f7879a"),
    ("rose_red", "#be013c"),
    ("rosy_pink", "#f6688e"),
    ("rouge", "#ab1239"),
    ("royal", "#0c1793"),
    ("royal_blue", "#0504aa"),
    ("royal_purple", "#4b006e"),
    ("ruby", "#ca0147"),
    ("russet", "#a13905"),
    ("rust", "#a83c09"),
    ("rust_brown", "#8b3103"),
    ("rust_orange", "#c45508"),
    ("rust_red", "#aa2704"),
    ("rusty_orange", "#cd5909"),
    ("rusty_red", "#af2f0d"),
    ("saffron", "#feb209"),
    ("sage", "#87ae73"),
    ("sage_green", "#88b378"),
    ("salmon", "#ff796c"),
    ("salmon_pink", "#fe7b7c"),
    ("sand", "#e2ca76"),
    ("sand_brown", "#cba560"),
    ("sand_yellow", "#fce166"),
    ("sandstone", "#c9ae74"),
    ("sandy", "#f1da7a"),
    ("sandy_brown", "#c4a661"),
    ("sandy_yellow", "#fdee73"),
    ("sap_green", "#5c8b15"),
    ("sapphire", "#2138ab"),
    ("scarlet", "#be0119"),
    ("sea", "#3c9992"),
    ("sea_blue", "#047495"),
    ("sea_green", "#53fca1"),
    ("seafoam", "#80f9ad"),
    ("seafoam_blue", "#78d1b6"),
    ("seafoam_green", "#7af9ab"),
    ("seaweed", "#18d17b"),
    ("seaweed_green", "#35ad6b"),
    ("sepia", "#985e2b"),
    ("shamrock", "#01b44c"),
    ("shamrock_green", "#02c14d"),
    ("shit", "#7f5f00"),
    ("shit_brown", "#7b5804"),
    ("shit_green", "#758000"),
    ("shocking_pink", "#fe02a2"),
    ("sick_green", "#9db92c"),
    ("sickly_green", "#94b21c"),
    ("sickly_yellow", "#d0e429"),
    ("sienna", "#a9561e"),
    ("silver", "#c5c9c7"),
    ("sky", "#82cafc"),
    ("sky_blue", "#75bbfd"),
    ("slate", "#516572"),
    ("slate_blue", "#5b7c99"),
    ("slate_green", "#658d6d"),
    ("slate_grey", "#59656d"),
    ("slime_green", "#99cc04"),
    ("snot", "#acbb0d"),
    ("snot_green", "#9dc100"),
    ("soft_blue", "#6488ea"),
    ("soft_green", "#6fc276"),
    ("soft_pink", "#fdb0c0"),
    ("soft_purple", "#a66fb5"),
    ("spearmint", "#1ef876"),
    ("spring_green", "#a9f971"),
    ("spruce", "#0a5f38"),
    ("squash", "#f2ab15"),
    ("steel", "#738595"),
    ("steel_blue", "#5a7d9a"),
    ("steel_grey", "#6f828a"),
    ("stone", "#ada587"),
    ("stormy_blue", "#507b9c"),
    ("straw", "#fcf679"),
    ("strawberry", "#fb2943"),
    ("strong_blue", "#0c06f7"),
    ("strong_pink", "#ff0789"),
    ("sun_yellow", "#ffdf22"),
    ("sunflower", "#ffc512"),
    ("sunflower_yellow", "#ffda03"),
    ("sunny_yellow", "#fff917"),
    ("sunshine_yellow", "#fffd37"),
    ("swamp", "#698339"),
    ("swamp_green", "#748500"),
    ("tan", "#d1b26f"),
    ("tan_brown", "#ab7e4c"),
    ("tan_green", "#a9be70"),
    ("tangerine", "#ff9408"),
    ("taupe", "#b9a281"),
    ("tea", "#65ab7c"),
    ("tea_green", "#bdf8a3"),
    ("teal", "#029386"),
    ("teal_blue", "#01889f"),
    ("teal_green", "#25a36f"),
    ("tealish", "#24bca8"),
    ("tealish_green", "#0cdc73"),
    ("terra_cotta", "#c9643b"),
    ("terracota", "#cb6843"),
    ("terracotta", "#ca6641"),
    ("tiffany_blue", "#7bf2da"),
    ("tomato", "#ef4026"),
    ("tomato_red", "#ec2d01"),
    ("topaz", "#13bbaf"),
    ("toupe", "#c7ac7d"),
    ("toxic_green", "#61de2a"),
    ("tree_green", "#2a7e19"),
    ("true_blue", "#010fcc"),
    ("true_green", "#089404"),
    ("turquoise", "#06c2ac"),
    ("turquoise_blue", "#06b1c4"),
    ("turquoise_green", "#04f489"),
    ("turtle_green", "#75b84f"),
    ("twilight", "#4e518b"),
    ("twilight_blue", "#0a437a"),
    ("ugly_blue", "#31668a"),
    ("ugly_brown", "#7d7103"),
    ("ugly_green", "#7a9703"),
    ("ugly_pink", "#cd7584"),
    ("ugly_purple", "#a442a0"),
    ("ugly_yellow", "#d0c101"),
    ("ultramarine", "#2000b1"),
    ("ultramarine_blue", "#1805db"),
    ("umber", "#b26400"),
    ("velvet", "#750851"),
    ("vermillion", "#f4320c"),
    ("very_dark_blue", "#000133"),
    ("very_dark_brown", "#1d0200"),
    ("very_dark_green", "#062e03"),
    ("very_dark_purple", "#2a0134"),
    ("very_light_blue", "#d5ffff"),
    ("very_light_brown", "#d3b683"),
    ("very_light_green", "#d1ffbd"),
    ("very_light_pink", "#fff4f2"),
    ("very_light_purple", "#f6cefc"),
    ("very_pale_blue", "#d6fffe"),
    ("very_pale_green", "#cffdbc"),
    ("vibrant_blue", "#0339f8"),
    ("vibrant_green", "#0add08"),
    ("vibrant_purple", "#ad03de"),
    ("violet", "#9a0eea"),
    ("violet_blue", "#510ac9"),
    ("violet_pink", "#fb5ffc"),
    ("violet_red", "#a50055"),
    ("viridian", "#1e9167"),
    ("vivid_blue", "#152eff"),
    ("vivid_green", "#2fef10"),
    ("vivid_purple", "#9900fa"),
    ("vomit", "#a2a415"),
    ("vomit_green", "#89a203"),
    ("vomit_yellow", "#c7c10c"),
    ("warm_blue", "#4b57db"),
    ("warm_brown", "#964e02"),
    ("warm_grey", "#978a84"),
    ("warm_pink", "#fb5581"),
    ("warm_purple", "#952e8f"),
    ("washed_out_green", "#bcf5a6"),
    ("water_blue", "#0e87cc"),
    ("watermelon", "#fd4659"),
    ("weird_green", "#3ae57f"),
    ("wheat", "#fbdd7e"),
    ("white", "#ffffff"),
    ("windows_blue", "#3778bf"),
    ("wine", "#80013f"),
    ("wine_red", "#7b0323"),
    ("wintergreen", "#20f986"),
    ("wisteria", "#a87dc2"),
    ("yellow", "#ffff14"),
    ("yellow/green", "#c8fd3d"),
    ("yellow_brown", "#b79400"),
    ("yellow_green", "#c0fb2d"),
    ("yellow_ochre", "#cb9d06"),
    ("yellow_orange", "#fcb001"),
    ("yellow_tan", "#ffe36e"),
    ("yellowgreen", "#bbf90f"),
    ("yellowish", "#faee66"),
    ("yellowish_brown", "#9b7a01"),
    ("yellowish_green", "#b0dd16"),
    ("yellowish_orange", "#ffab0f"),
    ("yellowish_tan", "#fcfc81"),
    ("yellowy_brown", "#ae8b0c"),
    ("yellowy_green", "#bff128"),
];

/// Find the 6 digit hex value of an xkcd color name, e.g. `"cloudy_blue"`.
pub fn name_to_hex(name: &str) -> Option<&'static str> {
    XKCD_COLORS
        .binary_search_by(|(n, _)| (*n).cmp(name))
        .ok()
        .map(|index| XKCD_COLORS[index].1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_sorted_by_name() {
        assert_eq!(XKCD_COLORS.len(), 949);
        assert!(XKCD_COLORS.windows(2).all(|w| w[0].0 < w[1].0));
    }

    #[test]
    fn lookup() {
        assert_eq!(name_to_hex("cloudy_blue"), Some("#acc2d9"));
        assert_eq!(name_to_hex("toxic_green"), Some("#61de2a"));
        assert_eq!(name_to_hex("acid_green"), Some("#8ffe09"));
        assert_eq!(name_to_hex("Cloudy_Blue"), None);
        assert_eq!(name_to_hex("red_blue_green"), None);
    }
}
