//! SAT `c_ClaveUnidad`: UN/CEFACT Recommendation 20 units of measure plus
//! the Recommendation 21 packaging codes, which carry an `X` prefix.

/// Sorted by code for binary search.
pub(super) static UNIT_CODES: &[(&str, &str)] = &[
    ("10", "Grupos"),
    ("11", "Equipos"),
    ("13", "Raciones"),
    ("14", "Shot"),
    ("15", "Barra"),
    ("16", "Tambor de ciento quince kilogramos"),
    ("17", "Tambor de cien libras"),
    ("18", "Tambor de cincuenta y cinco galones (US)"),
    ("19", "Camión cisterna"),
    ("1A", "Milla de coche"),
    ("1B", "Recuento de coche"),
    ("1C", "Recuento de locomotoras"),
    ("1D", "Recuento de cabús"),
    ("1E", "Recuento de coches vacíos"),
    ("1F", "Recuento de trenes"),
    ("1G", "Galón de combustible"),
    ("1H", "Milla de caboose"),
    ("1I", "Tasa fija"),
    ("1J", "Tonelada milla"),
    ("1K", "Milla locomotora"),
    ("1L", "Recuento total de coches"),
    ("1M", "Milla total de coches"),
    ("1X", "Cuarto de milla"),
    ("20", "Contenedor de veinte pies"),
    ("21", "Contenedor de cuarenta pies"),
    ("22", "Decilitro por gramo"),
    ("23", "Gramo por centímetro cúbico"),
    ("24", "Libra teórica"),
    ("25", "Gramo por centímetro cuadrado"),
    ("26", "Tonelada real"),
    ("27", "Tonelada teórica"),
    ("28", "Kilogramo por metro cuadrado"),
    ("29", "Libra por mil pies cuadrados"),
    ("2A", "Radián por segundo"),
    ("2B", "Radián por segundo al cuadrado"),
    ("2C", "Roentgen"),
    ("2G", "Voltios corriente alterna"),
    ("2H", "Voltios corriente directa"),
    ("2I", "Unidad térmica británica (tabla internacional) por hora"),
    ("2J", "Centímetro cúbico por segundo"),
    ("2K", "Pie cúbico por hora"),
    ("2L", "Pie cúbico por minuto"),
    ("2M", "Centímetro por segundo"),
    ("2N", "Decibel"),
    ("2P", "Kilobyte"),
    ("2Q", "Kilobecquerel"),
    ("2R", "Kilocurie"),
    ("2U", "Megagramo"),
    ("2V", "Megagramo por hora"),
    ("2W", "Contenedor"),
    ("2X", "Metro por minuto"),
    ("2Y", "Milliroentgen"),
    ("2Z", "Milivoltio"),
    ("30", "Caballo de fuerza por día por tonelada métrica seca al aire"),
    ("31", "Peso de captura"),
    ("32", "Kilogramo por tonelada seca al aire"),
    ("33", "Kilopascal metro cuadrado por gramo"),
    ("34", "Kilopascal por milímetro"),
    ("35", "Mililitro por centímetro cuadrado segundo"),
    ("36", "Pie cúbico por minuto por pie cuadrado"),
    ("37", "Onza por pie cuadrado"),
    ("38", "Onza por pie cuadrado por 0,01 pulgadas"),
    ("3B", "Megajoule"),
    ("3C", "Hombre mes"),
    ("3E", "Libra por libra de producto"),
    ("3G", "Libra por pieza de producto"),
    ("3H", "Kilogramo por kilogramo de producto"),
    ("3I", "Kilogramo por pieza de producto"),
    ("40", "Mililitro por segundo"),
    ("41", "Mililitro por minuto"),
    ("43", "Bolsa súper a granel"),
    ("44", "Bolsa a granel de quinientos kilogramos"),
    ("45", "Bolsa a granel de trescientos kilogramos"),
    ("46", "Bolsa a granel de cincuenta libras"),
    ("47", "Bolsa de cincuenta libras"),
    ("48", "Carga a granel"),
    ("4A", "Bobina"),
    ("4B", "Gorra"),
    ("4C", "Centistokes"),
    ("4E", "Paquete de veinte"),
    ("4G", "Microlitro"),
    ("4H", "Micrómetro (micrón)"),
    ("4K", "Miliamperio"),
    ("4L", "Megabyte"),
    ("4M", "Miligramo por hora"),
    ("4N", "Megabecquerel"),
    ("4O", "Microfaradio"),
    ("4P", "Newton por metro"),
    ("4Q", "Onza pulgada"),
    ("4R", "Onza pie"),
    ("4T", "Picofaradio"),
    ("4U", "Libra por hora"),
    ("4W", "Tonelada (US) por hora"),
    ("4X", "Kilolitro por hora"),
    ("53", "Kilogramo teórico"),
    ("54", "Tonelada teórica"),
    ("56", "Sitas"),
    ("57", "Malla"),
    ("58", "Kilogramo neto"),
    ("59", "Parte por millón"),
    ("5A", "Barril (US) por minuto"),
    ("5B", "Lote"),
    ("5C", "Galón (US) por mil"),
    ("5E", "MMSCF/día"),
    ("5F", "Libra por mil"),
    ("5G", "Galón de bombeo"),
    ("5H", "Milímetro de bombeo"),
    ("5I", "Pie de pie de bombeo"),
    ("5J", "Nivel de caballo de fuerza hidráulico"),
    ("5K", "Cuenta por minuto"),
    ("5P", "Nivel sísmico"),
    ("5Q", "Línea sísmica"),
    ("60", "Porcentaje de peso"),
    ("61", "Parte por billón (US)"),
    ("62", "Por ciento por 1000 horas"),
    ("63", "Tasa de fracaso en el tiempo"),
    ("64", "Libra por pulgada cuadrada, calibre"),
    ("66", "Oersted"),
    ("69", "Escala de prueba específica"),
    ("71", "Voltio amperio por libra"),
    ("72", "Vatio por libra"),
    ("73", "Amperio tum por centímetro"),
    ("74", "Milipascal"),
    ("76", "Gauss"),
    ("77", "Mili pulgada"),
    ("78", "Kilogauss"),
    ("80", "Libras por pulgada cuadrada absoluta"),
    ("81", "Henry"),
    ("84", "Kilopound-force por pulgada cuadrada"),
    ("85", "Fuerza de libra de pie"),
    ("87", "Libra por pie cúbico"),
    ("89", "Poise"),
    ("90", "Saybold segundo universal"),
    ("91", "Stokes"),
    ("92", "Calorías por centímetro cúbico"),
    ("93", "Calorías por gramo"),
    ("94", "Unidad de curl"),
    ("95", "Veinte mil galones (US) por carro de tanque"),
    ("96", "Diez mil galones (US) por carro de tanque"),
    ("97", "Tambor de diez kilogramos"),
    ("98", "Tambor de quince kilogramos"),
    ("A1", "Caloría de 15 ° C"),
    ("A10", "Amperio por metro cuadrado por joule segundo"),
    ("A11", "Ángstrom"),
    ("A12", "Unidad astronómica"),
    ("A13", "Attojoule"),
    ("A14", "Barn"),
    ("A15", "Barn por electrovoltio"),
    ("A16", "Barn por electrovoltio esteradián"),
    ("A17", "Barn por esteradián"),
    ("A18", "Becquerel por kilogramo"),
    ("A19", "Becquerel por metro cúbico"),
    ("A2", "Amperio por centímetro"),
    ("A20", "Unidad térmica británica (tabla internacional) por segundo pie cuadrado grado Rankine"),
    ("A21", "Unidad térmica británica (tabla internacional) por libra grado Rankine"),
    ("A22", "Unidad térmica británica (tabla internacional) por segundo pie grado Rankine"),
    ("A23", "Unidad térmica británica (tabla internacional) por hora pie cuadrado grado Rankine"),
    ("A24", "Candela por metro cuadrado"),
    ("A25", "Caballo de vapor"),
    ("A26", "Culombio metro"),
    ("A27", "Culombio metro cuadrado por voltio"),
    ("A28", "Culombio por centímetro cúbico"),
    ("A29", "Culombio por metro cúbico"),
    ("A3", "Amperio por milímetro"),
    ("A30", "Culombio por milímetro cúbico"),
    ("A31", "Culombio por kilogramo segundo"),
    ("A32", "Culombio por mol"),
    ("A33", "Culombio por centímetro cuadrado"),
    ("A34", "Culombio por metro cuadrado"),
    ("A35", "Culombio por milímetro cuadrado"),
    ("A36", "Centímetro cúbico por mol"),
    ("A37", "Decímetro cúbico por mol"),
    ("A38", "Metro cúbico por culombio"),
    ("A39", "Metro cúbico por kilogramo"),
    ("A4", "Amperio por centímetro cuadrado"),
    ("A40", "Metro cúbico por mol"),
    ("A41", "Amperio por metro cuadrado"),
    ("A42", "Curie por kilogramo"),
    ("A43", "Tonelaje de peso muerto"),
    ("A44", "Decalitro"),
    ("A45", "Decámetro"),
    ("A47", "Decitex"),
    ("A48", "Grado Rankine"),
    ("A49", "Denier"),
    ("A5", "Amperio metro cuadrado"),
    ("A50", "Dina segundo por centímetro cúbico"),
    ("A51", "Dina segundo por centímetro"),
    ("A52", "Dina segundo por centímetro a la quinta potencia"),
    ("A53", "Electronvoltio"),
    ("A54", "Electronvoltio por metro"),
    ("A55", "Electronvoltio metro cuadrado"),
    ("A56", "Electronvoltio metro cuadrado por kilogramo"),
    ("A57", "Ergio"),
    ("A58", "Erg por centímetro"),
    ("A59", "Cobertura de nubes 8-parte"),
    ("A6", "Amperio por metro cuadrado kelvin cuadrado"),
    ("A60", "Erg por centímetro cúbico"),
    ("A61", "Erg por gramo"),
    ("A62", "Erg por segundo gramo"),
    ("A63", "Erg por segundo"),
    ("A64", "Erg por segundo centímetro cuadrado"),
    ("A65", "Erg por centímetro cuadrado segundo"),
    ("A66", "Erg centímetro cuadrado"),
    ("A67", "Erg centímetro cuadrado por gramo"),
    ("A68", "Exajoule"),
    ("A69", "Faradio por metro"),
    ("A7", "Amperio por milímetro cuadrado"),
    ("A70", "Femtojoule"),
    ("A71", "Femtómetro"),
    ("A73", "Pie por segundo al cuadrado"),
    ("A74", "Pie libra-fuerza por segundo"),
    ("A75", "Tonelada de flete"),
    ("A76", "Galón"),
    ("A77", "Unidad de desplazamiento CGS de Gauss"),
    ("A78", "Unidad de corriente eléctrica CGS de Gauss"),
    ("A79", "Unidad de carga eléctrica CGS de Gauss"),
    ("A8", "Amperio segundo"),
    ("A80", "Unidad de fuerza de campo eléctrico CGS de Gauss"),
    ("A81", "Unidad de polarización eléctrica CGS de Gauss"),
    ("A82", "Unidad de potencial eléctrico CGS de Gauss"),
    ("A83", "Unidad de magnetización CGS de Gauss"),
    ("A84", "Gigacoulomb por metro cúbico"),
    ("A85", "Gigaelectronvoltio"),
    ("A86", "Gigahertz"),
    ("A87", "Gigaohm"),
    ("A88", "Gigaohm metro"),
    ("A89", "Gigapascal"),
    ("A9", "Tarifa"),
    ("A90", "Gigawatt"),
    ("A91", "Gon"),
    ("A93", "Gramo por metro cúbico"),
    ("A94", "Gramo por mol"),
    ("A95", "Gray"),
    ("A96", "Gray por segundo"),
    ("A97", "Hectopascal"),
    ("A98", "Henry por metro"),
    ("A99", "Bit"),
    ("AA", "Balón"),
    ("AB", "Paquete a granel"),
    ("ACR", "Acre"),
    ("ACT", "Actividad"),
    ("AD", "Byte"),
    ("AE", "Amperio por metro"),
    ("AH", "Minuto adicional"),
    ("AI", "Minuto promedio por llamada"),
    ("AK", "Braza"),
    ("AL", "Línea de acceso"),
    ("AMH", "Amperio hora"),
    ("AMP", "Amperio"),
    ("ANN", "Año"),
    ("APZ", "Onza troy u onza de farmacéuticos"),
    ("AQ", "Unidad de factor antihemofílico (AHF)"),
    ("AS", "Surtido"),
    ("ASM", "Grado de alcohol en masa"),
    ("ASU", "Grado de alcohol en volumen"),
    ("ATM", "Atmósfera estándar"),
    ("AWG", "Calibre de alambre americano"),
    ("AY", "Ensamble"),
    ("AZ", "Unidad térmica británica (tabla internacional) por libra"),
    ("B1", "Barril (US) por día"),
    ("B10", "Bit por segundo"),
    ("B11", "Joule por kilogramo kelvin"),
    ("B12", "Joule por metro"),
    ("B13", "Joule por metro cuadrado"),
    ("B14", "Joule por metro a la cuarta potencia"),
    ("B15", "Joule por mol"),
    ("B16", "Joule por mol kelvin"),
    ("B17", "Crédito"),
    ("B18", "Joule segundo"),
    ("B19", "Dígito"),
    ("B20", "Joule metro cuadrado por kilogramo"),
    ("B21", "Kelvin por watt"),
    ("B22", "Kiloamperio"),
    ("B23", "Kiloamperio por metro cuadrado"),
    ("B24", "Kiloamperio por metro"),
    ("B25", "Kilobecquerel por kilogramo"),
    ("B26", "Kilocoulomb"),
    ("B27", "Kilocoulomb por metro cúbico"),
    ("B28", "Kilocoulomb por metro cuadrado"),
    ("B29", "Kiloelectronvoltio"),
    ("B3", "Libra de bateo"),
    ("B30", "Gibibit"),
    ("B31", "Kilogramo metro por segundo"),
    ("B32", "Kilogramo metro cuadrado"),
    ("B33", "Kilogramo metro cuadrado por segundo"),
    ("B34", "Kilogramo por decímetro cúbico"),
    ("B35", "Kilogramo por litro"),
    ("B4", "Barril, imperial"),
    ("B41", "Kilojoule por kelvin"),
    ("B42", "Kilojoule por kilogramo"),
    ("B43", "Kilojoule por kilogramo kelvin"),
    ("B44", "Kilojoule por mol"),
    ("B45", "Kilomol"),
    ("B46", "Kilomol por metro cúbico"),
    ("B47", "Kilonewton"),
    ("B48", "Kilonewton metro"),
    ("B49", "Kiloohm"),
    ("B50", "Kiloohm metro"),
    ("B52", "Kilosegundo"),
    ("B53", "Kilosiemens"),
    ("B54", "Kilosiemens por metro"),
    ("B55", "Kilovoltio por metro"),
    ("B56", "Kiloweber por metro"),
    ("B57", "Año luz"),
    ("B58", "Litro por mol"),
    ("B59", "Lumen hora"),
    ("B60", "Lumen por metro cuadrado"),
    ("B61", "Lumen por watt"),
    ("B62", "Lumen segundo"),
    ("B63", "Lux hora"),
    ("B64", "Lux segundo"),
    ("B66", "Megaamperio por metro cuadrado"),
    ("B67", "Megabecquerel por kilogramo"),
    ("B68", "Gigabit"),
    ("B69", "Megacoulomb por metro cúbico"),
    ("B7", "Ciclo"),
    ("B70", "Megacoulomb por metro cuadrado"),
    ("B71", "Megaelectronvoltio"),
    ("B72", "Megagramo por metro cúbico"),
    ("B73", "Meganewton"),
    ("B74", "Meganewton metro"),
    ("B75", "Megaohm"),
    ("B76", "Megaohm metro"),
    ("B77", "Megasiemens por metro"),
    ("B78", "Megavoltio"),
    ("B79", "Megavoltio por metro"),
    ("B8", "Joule por metro cúbico"),
    ("B80", "Gigabit por segundo"),
    ("B81", "Metro recíproco al cuadrado por segundo recíproco"),
    ("B82", "Pulgada por pie lineal"),
    ("B83", "Metro a la cuarta potencia"),
    ("B84", "Microamperio"),
    ("B85", "Microbar"),
    ("B86", "Microcoulomb"),
    ("B87", "Microcoulomb por metro cúbico"),
    ("B88", "Microcoulomb por metro cuadrado"),
    ("B89", "Microfaradio por metro"),
    ("B90", "Microhenry"),
    ("B91", "Microhenry por metro"),
    ("B92", "Micronewton"),
    ("B93", "Micronewton metro"),
    ("B94", "Microohm"),
    ("B95", "Microohm metro"),
    ("B96", "Micropascal"),
    ("B97", "Microradián"),
    ("B98", "Microsegundo"),
    ("B99", "Microsiemens"),
    ("BAR", "Bar [unidad de presión]"),
    ("BB", "Caja base"),
    ("BFT", "Pie tablar"),
    ("BHP", "Caballo de fuerza al freno"),
    ("BIL", "Billón (EUR)"),
    ("BLD", "Barril seco (US)"),
    ("BLL", "Barril (US)"),
    ("BP", "Cien pies tablares"),
    ("BPM", "Pulsaciones por minuto"),
    ("BQL", "Becquerel"),
    ("BTU", "Unidad térmica británica (tabla internacional)"),
    ("BUA", "Bushel (US)"),
    ("BUI", "Bushel (UK)"),
    ("C0", "Llamada"),
    ("C10", "Milifaradio"),
    ("C11", "Miligal"),
    ("C12", "Miligramo por metro"),
    ("C13", "Miligray"),
    ("C14", "Milihenry"),
    ("C15", "Milijoule"),
    ("C16", "Milímetro por segundo"),
    ("C17", "Milímetro cuadrado por segundo"),
    ("C18", "Milimol"),
    ("C19", "Mol por kilogramo"),
    ("C20", "Milinewton"),
    ("C21", "Kibibit"),
    ("C22", "Milinewton por metro"),
    ("C23", "Miliohm metro"),
    ("C24", "Milipascal segundo"),
    ("C25", "Miliradián"),
    ("C26", "Milisegundo"),
    ("C27", "Milisiemens"),
    ("C28", "Milisievert"),
    ("C29", "Militesla"),
    ("C3", "Microvoltio por metro"),
    ("C30", "Milivoltio por metro"),
    ("C31", "Miliwatt"),
    ("C32", "Miliwatt por metro cuadrado"),
    ("C33", "Miliweber"),
    ("C34", "Mol"),
    ("C35", "Mol por decímetro cúbico"),
    ("C36", "Mol por metro cúbico"),
    ("C37", "Kilobit"),
    ("C38", "Mol por litro"),
    ("C39", "Nanoamperio"),
    ("C40", "Nanocoulomb"),
    ("C41", "Nanofaradio"),
    ("C42", "Nanofaradio por metro"),
    ("C43", "Nanohenry"),
    ("C44", "Nanohenry por metro"),
    ("C45", "Nanómetro"),
    ("C46", "Nanoohm metro"),
    ("C47", "Nanosegundo"),
    ("C48", "Nanotesla"),
    ("C49", "Nanowatt"),
    ("C50", "Neper"),
    ("C51", "Neper por segundo"),
    ("C52", "Picómetro"),
    ("C53", "Newton metro segundo"),
    ("C54", "Newton metro cuadrado por kilogramo cuadrado"),
    ("C55", "Newton por metro cuadrado"),
    ("C56", "Newton por milímetro cuadrado"),
    ("C57", "Newton segundo"),
    ("C58", "Newton segundo por metro"),
    ("C59", "Octava"),
    ("C60", "Ohm centímetro"),
    ("C61", "Ohm metro"),
    ("C62", "Uno"),
    ("C63", "Parsec"),
    ("C64", "Pascal por kelvin"),
    ("C65", "Pascal segundo"),
    ("C66", "Pascal segundo por metro cúbico"),
    ("C67", "Pascal segundo por metro"),
    ("C68", "Petajoule"),
    ("C69", "Phon"),
    ("C7", "Centipoise"),
    ("C70", "Picoamperio"),
    ("C71", "Picocoulomb"),
    ("C72", "Picofaradio por metro"),
    ("C73", "Picohenry"),
    ("C74", "Kilobit por segundo"),
    ("C75", "Picowatt"),
    ("C76", "Picowatt por metro cuadrado"),
    ("C78", "Libra-fuerza"),
    ("C79", "Kilovoltio amperio hora"),
    ("C8", "Milicoulomb por kilogramo"),
    ("C80", "Rad"),
    ("C81", "Radián"),
    ("C82", "Radián metro cuadrado por mol"),
    ("C83", "Radián metro cuadrado por kilogramo"),
    ("C84", "Radián por metro"),
    ("C85", "Ángstrom recíproco"),
    ("C86", "Metro cúbico recíproco"),
    ("C87", "Metro cúbico recíproco por segundo"),
    ("C88", "Electronvoltio recíproco por metro cúbico"),
    ("C89", "Henry recíproco"),
    ("C9", "Grupo de bobinas"),
    ("C90", "Joule recíproco por metro cúbico"),
    ("C91", "Kelvin recíproco o kelvin a la potencia menos uno"),
    ("C92", "Metro recíproco"),
    ("C93", "Metro cuadrado recíproco"),
    ("C94", "Minuto recíproco"),
    ("C95", "Mol recíproco"),
    ("C96", "Pascal recíproco o pascal a la potencia menos uno"),
    ("C97", "Segundo recíproco"),
    ("C98", "Segundo recíproco por metro cúbico"),
    ("C99", "Segundo recíproco por metro cuadrado"),
    ("CCT", "Capacidad de carga en toneladas métricas"),
    ("CDL", "Candela"),
    ("CEL", "Grado Celsius"),
    ("CEN", "Centenar"),
    ("CG", "Tarjeta"),
    ("CGM", "Centigramo"),
    ("CKG", "Coulomb por kilogramo"),
    ("CLF", "Cien hojas"),
    ("CLT", "Centilitro"),
    ("CMK", "Centímetro cuadrado"),
    ("CMQ", "Centímetro cúbico"),
    ("CMT", "Centímetro"),
    ("CNP", "Cien paquetes"),
    ("CNT", "Cental (UK)"),
    ("COU", "Coulomb"),
    ("CTG", "Gramo de contenido"),
    ("CTM", "Quilate métrico"),
    ("CTN", "Tonelada de contenido (métrica)"),
    ("CUR", "Curie"),
    ("CWA", "Cien libras (quintal) / Cien pesos (US)"),
    ("CWI", "Cien pesos (UK)"),
    ("D03", "Kilowatt hora por hora"),
    ("D04", "Lote [unidad de peso]"),
    ("D1", "Segundo recíproco por estereorradián"),
    ("D10", "Siemens por metro"),
    ("D11", "Mebibit"),
    ("D12", "Siemens metro cuadrado por mol"),
    ("D13", "Sievert"),
    ("D15", "Sone"),
    ("D16", "Centímetro cuadrado por ergio"),
    ("D17", "Centímetro cuadrado por estereorradián ergio"),
    ("D18", "Metro kelvin"),
    ("D19", "Metro cuadrado kelvin por watt"),
    ("D2", "Segundo recíproco por estereorradián metro cuadrado"),
    ("D20", "Metro cuadrado por joule"),
    ("D21", "Metro cuadrado por kilogramo"),
    ("D22", "Metro cuadrado por mol"),
    ("D23", "Pluma gramo (proteína)"),
    ("D24", "Metro cuadrado por estereorradián"),
    ("D25", "Metro cuadrado por estereorradián joule"),
    ("D26", "Metro cuadrado por voltio segundo"),
    ("D27", "Estereorradián"),
    ("D29", "Terahertz"),
    ("D30", "Terajoule"),
    ("D31", "Terawatt"),
    ("D32", "Terawatt hora"),
    ("D33", "Tesla"),
    ("D34", "Tex"),
    ("D36", "Megabit"),
    ("D41", "Tonelada por metro cúbico"),
    ("D42", "Año tropical"),
    ("D43", "Unidad de masa atómica unificada"),
    ("D44", "Var"),
    ("D45", "Voltio cuadrado por kelvin cuadrado"),
    ("D46", "Voltio-amperio"),
    ("D47", "Voltio por centímetro"),
    ("D48", "Voltio por kelvin"),
    ("D49", "Milivoltio por kelvin"),
    ("D5", "Kilogramo por centímetro cuadrado"),
    ("D50", "Voltio por metro"),
    ("D51", "Voltio por milímetro"),
    ("D52", "Watt por kelvin"),
    ("D53", "Watt por metro kelvin"),
    ("D54", "Watt por metro cuadrado"),
    ("D55", "Watt por metro cuadrado kelvin"),
    ("D56", "Watt por metro cuadrado kelvin a la cuarta potencia"),
    ("D57", "Watt por estereorradián"),
    ("D58", "Watt por estereorradián metro cuadrado"),
    ("D59", "Weber por metro"),
    ("D6", "Roentgen por segundo"),
    ("D60", "Weber por milímetro"),
    ("D61", "Minuto [unidad de ángulo]"),
    ("D62", "Segundo [unidad de ángulo]"),
    ("D63", "Libro"),
    ("D65", "Redondeo"),
    ("D68", "Número de palabras"),
    ("D69", "Pulgada a la cuarta potencia"),
    ("D73", "Joule metro cuadrado"),
    ("D74", "Kilogramo por mol"),
    ("D77", "Megacoulomb"),
    ("D78", "Megajoule por segundo"),
    ("D80", "Microwatt"),
    ("D81", "Microtesla"),
    ("D82", "Microvoltio"),
    ("D83", "Milinewton metro"),
    ("D85", "Microwatt por metro cuadrado"),
    ("D86", "Milicoulomb"),
    ("D87", "Milimol por kilogramo"),
    ("D88", "Milicoulomb por metro cúbico"),
    ("D89", "Milicoulomb por metro cuadrado"),
    ("D91", "Rem"),
    ("D93", "Segundo por metro cúbico"),
    ("D94", "Segundo por metro cúbico radián"),
    ("D95", "Joule por gramo"),
    ("DAA", "Decárea"),
    ("DAD", "Decena de días"),
    ("DAY", "Día"),
    ("DB", "Libra seca"),
    ("DC", "Disco"),
    ("DD", "Grado [unidad de ángulo]"),
    ("DEC", "Decada"),
    ("DG", "Decigramo"),
    ("DJ", "Decagramo"),
    ("DLT", "Decilitro"),
    ("DMA", "Decámetro cúbico"),
    ("DMK", "Decímetro cuadrado"),
    ("DMO", "Kilolitro estándar"),
    ("DMQ", "Decímetro cúbico"),
    ("DMT", "Decímetro"),
    ("DN", "Decinewton metro"),
    ("DPC", "Docena de piezas"),
    ("DPR", "Docena de pares"),
    ("DPT", "Tonelaje de desplazamiento"),
    ("DRA", "Dram (US)"),
    ("DRI", "Dram (UK)"),
    ("DRL", "Docena de rollos"),
    ("DT", "Tonelada seca"),
    ("DTN", "Decitonelada"),
    ("DWT", "Pennyweight"),
    ("DZN", "Docena"),
    ("DZP", "Docena de paquetes"),
    ("E01", "Newton por centímetro cuadrado"),
    ("E07", "Megawatt hora por hora"),
    ("E08", "Megawatt por hertz"),
    ("E09", "Miliamperio hora"),
    ("E10", "Grado día"),
    ("E12", "Mil"),
    ("E14", "Kilocaloría (tabla internacional)"),
    ("E15", "Kilocaloría (termoquímica) por hora"),
    ("E16", "Millón de unidades térmicas británicas (tabla internacional) por hora"),
    ("E17", "Pie cúbico por segundo"),
    ("E18", "Tonelada por hora"),
    ("E19", "Ping"),
    ("E20", "Megabit por segundo"),
    ("E21", "Acciones"),
    ("E22", "TEU (unidad equivalente a veinte pies)"),
    ("E23", "Neumático"),
    ("E25", "Unidad activa"),
    ("E27", "Dosis"),
    ("E28", "Tonelada seca al aire"),
    ("E30", "Filamento"),
    ("E31", "Metro cuadrado por litro"),
    ("E32", "Litro por hora"),
    ("E33", "Pie por mil"),
    ("E34", "Gigabyte"),
    ("E35", "Terabyte"),
    ("E36", "Petabyte"),
    ("E37", "Pixel"),
    ("E38", "Megapíxeles"),
    ("E39", "Puntos por pulgada"),
    ("E4", "Kilogramo bruto"),
    ("E40", "Parte por cien mil"),
    ("E41", "Kilogramo-fuerza por milímetro cuadrado"),
    ("E42", "Kilogramo-fuerza por centímetro cuadrado"),
    ("E43", "Joule por centímetro cuadrado"),
    ("E44", "Kilogramo-fuerza metro por centímetro cuadrado"),
    ("E45", "Miliohm"),
    ("E46", "Kilowatt hora por metro cúbico"),
    ("E47", "Kilowatt hora por kelvin"),
    ("E48", "Unidad de servicio"),
    ("E49", "Día de trabajo"),
    ("E50", "Unidad de cuenta"),
    ("E51", "Trabajo"),
    ("E52", "Pie de ejecución"),
    ("E53", "Prueba"),
    ("E54", "Viaje"),
    ("E55", "Uso"),
    ("E56", "Pozo"),
    ("E57", "Zona"),
    ("E58", "Exabit por segundo"),
    ("E59", "Exbibyte"),
    ("E60", "Pebibyte"),
    ("E61", "Tebibyte"),
    ("E62", "Gibibyte"),
    ("E63", "Mebibyte"),
    ("E64", "Kibibyte"),
    ("E65", "Exbibit por metro"),
    ("E66", "Exbibit por metro cuadrado"),
    ("E67", "Exbibit por metro cúbico"),
    ("E68", "Gigabyte por segundo"),
    ("E69", "Gibibit por metro"),
    ("E70", "Gibibit por metro cuadrado"),
    ("E71", "Gibibit por metro cúbico"),
    ("E72", "Kibibit por metro"),
    ("E73", "Kibibit por metro cuadrado"),
    ("E74", "Kibibit por metro cúbico"),
    ("E75", "Mebibit por metro"),
    ("E76", "Mebibit por metro cuadrado"),
    ("E77", "Mebibit por metro cúbico"),
    ("E78", "Petabit"),
    ("E79", "Petabit por segundo"),
    ("E80", "Pebibit por metro"),
    ("E81", "Pebibit por metro cuadrado"),
    ("E82", "Pebibit por metro cúbico"),
    ("E83", "Petabyte por segundo"),
    ("E84", "Tebibit por metro"),
    ("E85", "Tebibit por metro cuadrado"),
    ("E86", "Tebibit por metro cúbico"),
    ("E87", "Terabit"),
    ("E88", "Terabit por segundo"),
    ("E89", "Tebibit"),
    ("E90", "Centímetro recíproco"),
    ("E91", "Día recíproco"),
    ("E92", "Decímetro cúbico por hora"),
    ("E93", "Kilogramo por hora"),
    ("E94", "Kilomol por segundo"),
    ("E95", "Mol por segundo"),
    ("E96", "Grado por segundo"),
    ("E97", "Milímetro por grado Celsius metro"),
    ("E98", "Grado Celsius por kelvin"),
    ("E99", "Hectopascal por bar"),
    ("EA", "Elemento"),
    ("EB", "Casilla de correo electrónico"),
    ("EQ", "Galón equivalente"),
    ("F01", "Bit por metro"),
    ("F02", "Kelvin por kelvin"),
    ("F03", "Kilopascal por bar"),
    ("F04", "Milibar por bar"),
    ("F05", "Megapascal por bar"),
    ("F06", "Poise por bar"),
    ("F07", "Pascal por bar"),
    ("F08", "Miliamperio por pulgada"),
    ("F10", "Kelvin por hora"),
    ("F11", "Kelvin por minuto"),
    ("F12", "Kelvin por segundo"),
    ("F13", "Slug"),
    ("F14", "Gramo por kelvin"),
    ("F15", "Kilogramo por kelvin"),
    ("F16", "Miligramo por kelvin"),
    ("F17", "Libra-fuerza por pie"),
    ("F18", "Kilogramo centímetro cuadrado"),
    ("F19", "Kilogramo milímetro cuadrado"),
    ("F20", "Libra pulgada cuadrada"),
    ("F21", "Libra-fuerza pulgada"),
    ("F22", "Libra-fuerza pie por amperio"),
    ("F23", "Gramo por decímetro cúbico"),
    ("F24", "Kilogramo por kilomol"),
    ("F25", "Gramo por hertz"),
    ("F26", "Gramo por día"),
    ("F27", "Gramo por hora"),
    ("F28", "Gramo por minuto"),
    ("F29", "Gramo por segundo"),
    ("F30", "Kilogramo por día"),
    ("F31", "Kilogramo por minuto"),
    ("F32", "Miligramo por día"),
    ("F33", "Miligramo por minuto"),
    ("F34", "Miligramo por segundo"),
    ("F35", "Gramo por día kelvin"),
    ("F36", "Gramo por hora kelvin"),
    ("F37", "Gramo por minuto kelvin"),
    ("F38", "Gramo por segundo kelvin"),
    ("F39", "Kilogramo por día kelvin"),
    ("F40", "Kilogramo por hora kelvin"),
    ("F41", "Kilogramo por minuto kelvin"),
    ("F42", "Kilogramo por segundo kelvin"),
    ("F43", "Miligramo por día kelvin"),
    ("F44", "Miligramo por hora kelvin"),
    ("F45", "Miligramo por minuto kelvin"),
    ("F46", "Miligramo por segundo kelvin"),
    ("F47", "Newton por milímetro"),
    ("F48", "Libra-fuerza por pulgada"),
    ("F49", "Barra de tiempo"),
    ("F50", "Micrómetro por kelvin"),
    ("F51", "Centímetro por kelvin"),
    ("F52", "Metro por kelvin"),
    ("F53", "Milímetro por kelvin"),
    ("F54", "Miliohm por metro"),
    ("F55", "Ohm por milla (milla terrestre)"),
    ("F56", "Ohm por kilómetro"),
    ("F57", "Miliamperio por libra-fuerza por pulgada cuadrada"),
    ("F58", "Bar recíproco"),
    ("F59", "Miliamperio por bar"),
    ("F60", "Grado Celsius por bar"),
    ("F61", "Kelvin por bar"),
    ("F62", "Gramo por día bar"),
    ("F63", "Gramo por hora bar"),
    ("F64", "Gramo por minuto bar"),
    ("F65", "Gramo por segundo bar"),
    ("F66", "Kilogramo por día bar"),
    ("F67", "Kilogramo por hora bar"),
    ("F68", "Kilogramo por minuto bar"),
    ("F69", "Kilogramo por segundo bar"),
    ("F70", "Miligramo por día bar"),
    ("F71", "Miligramo por hora bar"),
    ("F72", "Miligramo por minuto bar"),
    ("F73", "Miligramo por segundo bar"),
    ("F74", "Gramo por bar"),
    ("F75", "Miligramo por bar"),
    ("F76", "Miliamperio por milímetro"),
    ("F77", "Pascal segundo por kelvin"),
    ("F78", "Pulgada de agua"),
    ("F79", "Pulgada de mercurio"),
    ("F80", "Caballo de fuerza de agua"),
    ("F81", "Bar por kelvin"),
    ("F82", "Hectopascal por kelvin"),
    ("F83", "Kilopascal por kelvin"),
    ("F84", "Milibar por kelvin"),
    ("F85", "Megapascal por kelvin"),
    ("F86", "Poise por kelvin"),
    ("F87", "Voltio por litro minuto"),
    ("F88", "Newton centímetro"),
    ("F89", "Newton metro por grado"),
    ("F90", "Newton por amperio"),
    ("F91", "Bar litro por segundo"),
    ("F92", "Bar metro cúbico por segundo"),
    ("F93", "Hectopascal litro por segundo"),
    ("F94", "Hectopascal metro cúbico por segundo"),
    ("F95", "Milibar litro por segundo"),
    ("F96", "Milibar metro cúbico por segundo"),
    ("F97", "Megapascal litro por segundo"),
    ("F98", "Megapascal metro cúbico por segundo"),
    ("F99", "Pascal litro por segundo"),
    ("FAH", "Grado Fahrenheit"),
    ("FAR", "Faradio"),
    ("FBM", "Metro de fibra"),
    ("FC", "Mil pies cúbicos"),
    ("FF", "Cien metros cúbicos"),
    ("FH", "Micromol"),
    ("FIT", "Fallas en el tiempo"),
    ("FL", "Tonelada de escamas"),
    ("FNU", "Unidad de nefelometría de formazina"),
    ("FOT", "Pie"),
    ("FP", "Libra por pie cuadrado"),
    ("FR", "Pie por minuto"),
    ("FS", "Pie por segundo"),
    ("FTK", "Pie cuadrado"),
    ("FTQ", "Pie cúbico"),
    ("G01", "Pascal metro cúbico por segundo"),
    ("G04", "Centímetro por bar"),
    ("G05", "Metro por bar"),
    ("G06", "Milímetro por bar"),
    ("G08", "Pulgada cuadrada por segundo"),
    ("G09", "Metro cuadrado por segundo kelvin"),
    ("G10", "Stokes por kelvin"),
    ("G11", "Gramo por centímetro cúbico bar"),
    ("G12", "Gramo por decímetro cúbico bar"),
    ("G13", "Gramo por litro bar"),
    ("G14", "Gramo por metro cúbico bar"),
    ("G15", "Gramo por mililitro bar"),
    ("G16", "Kilogramo por centímetro cúbico bar"),
    ("G17", "Kilogramo por litro bar"),
    ("G18", "Kilogramo por metro cúbico bar"),
    ("G19", "Newton metro por kilogramo"),
    ("G2", "Galón (US) por minuto"),
    ("G20", "Libra-fuerza pie por libra"),
    ("G21", "Taza [unidad de volumen]"),
    ("G23", "Peck"),
    ("G24", "Cucharada (US)"),
    ("G25", "Cucharadita (US)"),
    ("G26", "Estere"),
    ("G27", "Centímetro cúbico por kelvin"),
    ("G28", "Litro por kelvin"),
    ("G29", "Metro cúbico por kelvin"),
    ("G3", "Galón (UK) por minuto"),
    ("G30", "Mililitro por kelvin"),
    ("G31", "Kilogramo por centímetro cúbico"),
    ("G32", "Onza (avoirdupois) por yarda cúbica"),
    ("G33", "Gramo por centímetro cúbico kelvin"),
    ("G34", "Gramo por decímetro cúbico kelvin"),
    ("G35", "Gramo por litro kelvin"),
    ("G36", "Gramo por metro cúbico kelvin"),
    ("G37", "Gramo por mililitro kelvin"),
    ("G38", "Kilogramo por centímetro cúbico kelvin"),
    ("G39", "Kilogramo por litro kelvin"),
    ("G40", "Kilogramo por metro cúbico kelvin"),
    ("G41", "Metro cuadrado por segundo bar"),
    ("G42", "Micro siemens por centímetro"),
    ("G43", "Microsiemens por metro"),
    ("G44", "Nanosiemens por centímetro"),
    ("G45", "Nanosiemens por metro"),
    ("G46", "Stokes por bar"),
    ("G47", "Centímetro cúbico por día"),
    ("G48", "Centímetro cúbico por hora"),
    ("G49", "Centímetro cúbico por minuto"),
    ("G50", "Galón (US) por hora"),
    ("G51", "Litro por segundo"),
    ("G52", "Metro cúbico por día"),
    ("G53", "Metro cúbico por minuto"),
    ("G54", "Mililitro por día"),
    ("G55", "Mililitro por hora"),
    ("G56", "Pulgada cúbica por hora"),
    ("G57", "Pulgada cúbica por minuto"),
    ("G58", "Pulgada cúbica por segundo"),
    ("G59", "Miliamperio por litro minuto"),
    ("G60", "Voltio por bar"),
    ("G61", "Centímetro cúbico por día kelvin"),
    ("G62", "Centímetro cúbico por hora kelvin"),
    ("G63", "Centímetro cúbico por minuto kelvin"),
    ("G64", "Centímetro cúbico por segundo kelvin"),
    ("G65", "Litro por día kelvin"),
    ("G66", "Litro por hora kelvin"),
    ("G67", "Litro por minuto kelvin"),
    ("G68", "Litro por segundo kelvin"),
    ("G69", "Metro cúbico por día kelvin"),
    ("G70", "Metro cúbico por hora kelvin"),
    ("G71", "Metro cúbico por minuto kelvin"),
    ("G72", "Metro cúbico por segundo kelvin"),
    ("G73", "Mililitro por día kelvin"),
    ("G74", "Mililitro por hora kelvin"),
    ("G75", "Mililitro por minuto kelvin"),
    ("G76", "Mililitro por segundo kelvin"),
    ("G77", "Milímetro a la cuarta potencia"),
    ("G78", "Centímetro cúbico por día bar"),
    ("G79", "Centímetro cúbico por hora bar"),
    ("G80", "Centímetro cúbico por minuto bar"),
    ("G81", "Centímetro cúbico por segundo bar"),
    ("G82", "Litro por día bar"),
    ("G83", "Litro por hora bar"),
    ("G84", "Litro por minuto bar"),
    ("G85", "Litro por segundo bar"),
    ("G86", "Metro cúbico por día bar"),
    ("G87", "Metro cúbico por hora bar"),
    ("G88", "Metro cúbico por minuto bar"),
    ("G89", "Metro cúbico por segundo bar"),
    ("G90", "Mililitro por día bar"),
    ("G91", "Mililitro por hora bar"),
    ("G92", "Mililitro por minuto bar"),
    ("G93", "Mililitro por segundo bar"),
    ("G94", "Centímetro cúbico por bar"),
    ("G95", "Litro por bar"),
    ("G96", "Metro cúbico por bar"),
    ("G97", "Mililitro por bar"),
    ("G98", "Microhenry por kiloohm"),
    ("G99", "Microhenry por ohm"),
    ("GB", "Galón (US) por día"),
    ("GBQ", "Gigabecquerel"),
    ("GDW", "Gramo, peso seco"),
    ("GE", "Libra por galón (US)"),
    ("GF", "Gramo por metro (gramo por 100 centímetros)"),
    ("GFI", "Gramo de isótopo fisible"),
    ("GGR", "Gran gruesa"),
    ("GIA", "Gill (US)"),
    ("GIC", "Gramo, incluido contenedor"),
    ("GII", "Gill (UK)"),
    ("GIP", "Gramo, incluido el embalaje interior"),
    ("GJ", "Gramo por mililitro"),
    ("GL", "Gramo por litro"),
    ("GLD", "Galón seco (US)"),
    ("GLI", "Galón (UK)"),
    ("GLL", "Galón (US)"),
    ("GM", "Gramo por metro cuadrado"),
    ("GO", "Miligramo por metro cuadrado"),
    ("GP", "Miligramo por metro cúbico"),
    ("GQ", "Microgramo por metro cúbico"),
    ("GRM", "Gramo"),
    ("GRN", "Grano"),
    ("GRO", "Gruesa"),
    ("GV", "Gigajoule"),
    ("GWH", "Gigawatt hora"),
    ("H03", "Henry por kiloohm"),
    ("H04", "Henry por ohm"),
    ("H05", "Milihenry por kiloohm"),
    ("H06", "Milihenry por ohm"),
    ("H07", "Pascal segundo por bar"),
    ("H08", "Microbecquerel"),
    ("H09", "Año recíproco"),
    ("H10", "Hora recíproca"),
    ("H11", "Mes recíproco"),
    ("H12", "Grado Celsius por hora"),
    ("H13", "Grado Celsius por minuto"),
    ("H14", "Grado Celsius por segundo"),
    ("H15", "Centímetro cuadrado por gramo"),
    ("H16", "Decámetro cuadrado"),
    ("H18", "Hectómetro cuadrado"),
    ("H19", "Hectómetro cúbico"),
    ("H20", "Kilómetro cúbico"),
    ("H21", "Blanco"),
    ("H22", "Voltio pulgada cuadrada por libra-fuerza"),
    ("H23", "Voltio por pulgada"),
    ("H24", "Voltio por microsegundo"),
    ("H25", "Por ciento por kelvin"),
    ("H26", "Ohm por metro"),
    ("H27", "Grado por metro"),
    ("H28", "Microfaradio por kilómetro"),
    ("H29", "Microgramo por litro"),
    ("H30", "Micrómetro cuadrado"),
    ("H31", "Amperio por kilogramo"),
    ("H32", "Amperio cuadrado segundo"),
    ("H33", "Faradio por kilómetro"),
    ("H34", "Hertz metro"),
    ("H35", "Kelvin metro por watt"),
    ("H36", "Megaohm por kilómetro"),
    ("H37", "Megaohm por metro"),
    ("H38", "Megaamperio"),
    ("H39", "Megahertz kilómetro"),
    ("H40", "Newton por amperio"),
    ("H41", "Newton metro watt a la potencia menos 0,5"),
    ("H42", "Pascal por metro"),
    ("H43", "Siemens por centímetro"),
    ("H44", "Teraohm"),
    ("H45", "Voltio segundo por metro"),
    ("H46", "Voltio por segundo"),
    ("H47", "Watt por metro cúbico"),
    ("H48", "Attofaradio"),
    ("H49", "Centímetro por hora"),
    ("H50", "Centímetro cúbico recíproco"),
    ("H51", "Decibel por kilómetro"),
    ("H52", "Decibel por metro"),
    ("H53", "Kilogramo por bar"),
    ("H54", "Kilogramo por decímetro cúbico kelvin"),
    ("H55", "Kilogramo por decímetro cúbico bar"),
    ("H56", "Kilogramo por metro cuadrado segundo"),
    ("H57", "Pulgada por dos pi radián"),
    ("H58", "Metro por voltio segundo"),
    ("H59", "Metro cuadrado por newton"),
    ("H60", "Metro cúbico por metro cúbico"),
    ("H61", "Milisiemens por centímetro"),
    ("H62", "Milivoltio por minuto"),
    ("H63", "Miligramo por centímetro cuadrado"),
    ("H64", "Miligramo por gramo"),
    ("H65", "Mililitro por metro cúbico"),
    ("H66", "Milímetro por año"),
    ("H67", "Milímetro por hora"),
    ("H68", "Milimol por gramo"),
    ("H69", "Picopascal por kilómetro"),
    ("H70", "Picosegundo"),
    ("H71", "Por ciento por mes"),
    ("H72", "Por ciento por hectobar"),
    ("H73", "Por ciento por decakelvin"),
    ("H74", "Watt por metro"),
    ("H75", "Decapascal"),
    ("H76", "Gramo por milímetro"),
    ("H77", "Ancho del módulo"),
    ("H78", "Centímetro convencional de agua"),
    ("H79", "Escala French"),
    ("H80", "Unidad de rack"),
    ("H81", "Milímetro por minuto"),
    ("H82", "Punto grande"),
    ("H83", "Litro por kilogramo"),
    ("H84", "Gramo milímetro"),
    ("H85", "Semana recíproca"),
    ("H87", "Pieza"),
    ("H88", "Megaohm kilómetro"),
    ("H89", "Por ciento por ohm"),
    ("H90", "Por ciento por grado"),
    ("H91", "Por ciento por diez mil"),
    ("H92", "Por ciento por cien mil"),
    ("H93", "Por ciento por cien"),
    ("H94", "Por ciento por mil"),
    ("H95", "Por ciento por voltio"),
    ("H96", "Por ciento por bar"),
    ("H98", "Por ciento por pulgada"),
    ("H99", "Por ciento por metro"),
    ("HA", "Madeja"),
    ("HAR", "Hectárea"),
    ("HBA", "Hectobar"),
    ("HBX", "Cien cajas"),
    ("HC", "Conteo de cientos"),
    ("HDW", "Cien kilogramos, peso seco"),
    ("HEA", "Cabeza"),
    ("HGM", "Hectogramo"),
    ("HH", "Cien pies cúbicos"),
    ("HIU", "Cien unidades internacionales"),
    ("HKM", "Cien kilogramos, masa neta"),
    ("HLT", "Hectolitro"),
    ("HM", "Milla por hora (milla terrestre)"),
    ("HMQ", "Millón de metros cúbicos"),
    ("HMT", "Hectómetro"),
    ("HPA", "Hectolitro de alcohol puro"),
    ("HTZ", "Hertz"),
    ("HUR", "Hora"),
    ("IA", "Pulgada libra (libra pulgada)"),
    ("IE", "Persona"),
    ("INH", "Pulgada"),
    ("INK", "Pulgada cuadrada"),
    ("INQ", "Pulgada cúbica"),
    ("ISD", "Grado internacional de azúcar"),
    ("IU", "Pulgada por segundo"),
    ("IUG", "Unidad internacional por gramo"),
    ("IV", "Pulgada por segundo al cuadrado"),
    ("J10", "Por ciento por milímetro"),
    ("J12", "Por mil por psi"),
    ("J13", "Grado API"),
    ("J14", "Grado Baume (escala de origen)"),
    ("J15", "Grado Baume (US pesado)"),
    ("J16", "Grado Baume (US ligero)"),
    ("J17", "Grado Balling"),
    ("J18", "Grado Brix"),
    ("J19", "Grado Fahrenheit hora pie cuadrado por unidad térmica británica (termoquímica)"),
    ("J2", "Joule por kilogramo"),
    ("J20", "Grado Fahrenheit por kelvin"),
    ("J21", "Grado Fahrenheit por bar"),
    ("J22", "Grado Fahrenheit hora pie cuadrado por unidad térmica británica (tabla internacional)"),
    ("J23", "Grado Fahrenheit por hora"),
    ("J24", "Grado Fahrenheit por minuto"),
    ("J25", "Grado Fahrenheit por segundo"),
    ("J26", "Grado Fahrenheit recíproco"),
    ("J27", "Grado Oechsle"),
    ("J28", "Grado Rankine por hora"),
    ("J29", "Grado Rankine por minuto"),
    ("J30", "Grado Rankine por segundo"),
    ("J31", "Grado Twaddell"),
    ("J32", "Micropoise"),
    ("J33", "Microgramo por kilogramo"),
    ("J34", "Microgramo por metro cúbico kelvin"),
    ("J35", "Microgramo por metro cúbico bar"),
    ("J36", "Microlitro por litro"),
    ("J38", "Baudio"),
    ("J39", "Unidad térmica británica (media)"),
    ("J40", "Unidad térmica británica (tabla internacional) pie por hora pie cuadrado grado Fahrenheit"),
    ("J41", "Unidad térmica británica (tabla internacional) pulgada por hora pie cuadrado grado Fahrenheit"),
    ("J42", "Unidad térmica británica (tabla internacional) pulgada por segundo pie cuadrado grado Fahrenheit"),
    ("J43", "Unidad térmica británica (tabla internacional) por libra grado Fahrenheit"),
    ("J44", "Unidad térmica británica (tabla internacional) por minuto"),
    ("J45", "Unidad térmica británica (tabla internacional) por segundo"),
    ("J46", "Unidad térmica británica (termoquímica) pie por hora pie cuadrado grado Fahrenheit"),
    ("J47", "Unidad térmica británica (termoquímica) por hora"),
    ("J48", "Unidad térmica británica (termoquímica) pulgada por hora pie cuadrado grado Fahrenheit"),
    ("J49", "Unidad térmica británica (termoquímica) pulgada por segundo pie cuadrado grado Fahrenheit"),
    ("J50", "Unidad térmica británica (termoquímica) por libra grado Fahrenheit"),
    ("J51", "Unidad térmica británica (termoquímica) por minuto"),
    ("J52", "Unidad térmica británica (termoquímica) por segundo"),
    ("J53", "Coulomb metro cuadrado por kilogramo"),
    ("J54", "Megabaudio"),
    ("J55", "Watt segundo"),
    ("J56", "Bar por bar"),
    ("J57", "Barril (UK petróleo)"),
    ("J58", "Barril (UK petróleo) por minuto"),
    ("J59", "Barril (UK petróleo) por día"),
    ("J60", "Barril (UK petróleo) por hora"),
    ("J61", "Barril (UK petróleo) por segundo"),
    ("J62", "Barril (US petróleo) por hora"),
    ("J63", "Barril (US petróleo) por segundo"),
    ("J64", "Bushel (UK) por día"),
    ("J65", "Bushel (UK) por hora"),
    ("J66", "Bushel (UK) por minuto"),
    ("J67", "Bushel (UK) por segundo"),
    ("J68", "Bushel (US seco) por día"),
    ("J69", "Bushel (US seco) por hora"),
    ("J70", "Bushel (US seco) por minuto"),
    ("J71", "Bushel (US seco) por segundo"),
    ("J72", "Centinewton metro"),
    ("J73", "Centipoise por kelvin"),
    ("J74", "Centipoise por bar"),
    ("J75", "Caloría (media)"),
    ("J76", "Caloría (tabla internacional) por gramo grado Celsius"),
    ("J78", "Caloría (termoquímica) por centímetro segundo grado Celsius"),
    ("J79", "Caloría (termoquímica) por gramo grado Celsius"),
    ("J81", "Caloría (termoquímica) por minuto"),
    ("J82", "Caloría (termoquímica) por segundo"),
    ("J83", "Clo"),
    ("J84", "Centímetro por segundo kelvin"),
    ("J85", "Centímetro por segundo bar"),
    ("J87", "Centímetro cúbico por metro cúbico"),
    ("J90", "Decímetro cúbico por día"),
    ("J91", "Decímetro cúbico por metro cúbico"),
    ("J92", "Decímetro cúbico por minuto"),
    ("J93", "Decímetro cúbico por segundo"),
    ("J95", "Onza (UK fluido) por día"),
    ("J96", "Onza (UK fluido) por hora"),
    ("J97", "Onza (UK fluido) por minuto"),
    ("J98", "Onza (UK fluido) por segundo"),
    ("J99", "Onza (US fluido) por día"),
    ("JE", "Joule por kelvin"),
    ("JK", "Megajoule por kilogramo"),
    ("JM", "Megajoule por metro cúbico"),
    ("JNT", "Junta de tubería"),
    ("JOU", "Joule"),
    ("JPS", "Cien metros"),
    ("JWL", "Número de joyas"),
    ("K1", "Demanda de kilowatt"),
    ("K10", "Onza (US fluido) por hora"),
    ("K11", "Onza (US fluido) por minuto"),
    ("K12", "Onza (US fluido) por segundo"),
    ("K13", "Pie por grado Fahrenheit"),
    ("K14", "Pie por hora"),
    ("K15", "Pie libra-fuerza por hora"),
    ("K16", "Pie libra-fuerza por minuto"),
    ("K17", "Pie por psi"),
    ("K18", "Pie por segundo grado Fahrenheit"),
    ("K19", "Pie por segundo psi"),
    ("K2", "Demanda reactiva de kilovoltios amperios"),
    ("K20", "Pie cúbico recíproco"),
    ("K21", "Pie cúbico por grado Fahrenheit"),
    ("K22", "Pie cúbico por día"),
    ("K23", "Pie cúbico por psi"),
    ("K26", "Galón (UK) por día"),
    ("K27", "Galón (UK) por hora"),
    ("K28", "Galón (UK) por segundo"),
    ("K3", "Kilovoltio amperio reactivo hora"),
    ("K30", "Galón (US líquido) por segundo"),
    ("K31", "Gramo-fuerza por centímetro cuadrado"),
    ("K32", "Gill (UK) por día"),
    ("K33", "Gill (UK) por hora"),
    ("K34", "Gill (UK) por minuto"),
    ("K35", "Gill (UK) por segundo"),
    ("K36", "Gill (US) por día"),
    ("K37", "Gill (US) por hora"),
    ("K38", "Gill (US) por minuto"),
    ("K39", "Gill (US) por segundo"),
    ("K40", "Aceleración estándar de la caída libre"),
    ("K41", "Grano por galón (US)"),
    ("K42", "Caballo de fuerza (caldera)"),
    ("K43", "Caballo de fuerza (eléctrico)"),
    ("K45", "Pulgada por grado Fahrenheit"),
    ("K46", "Pulgada por psi"),
    ("K47", "Pulgada por segundo grado Fahrenheit"),
    ("K48", "Pulgada por segundo psi"),
    ("K49", "Pulgada cúbica recíproca"),
    ("K50", "Kilobaudio"),
    ("K51", "Kilocaloría (media)"),
    ("K52", "Kilocaloría (tabla internacional) por hora metro grado Celsius"),
    ("K53", "Kilocaloría (termoquímica)"),
    ("K54", "Kilocaloría (termoquímica) por minuto"),
    ("K55", "Kilocaloría (termoquímica) por segundo"),
    ("K58", "Kilomol por hora"),
    ("K59", "Kilomol por metro cúbico kelvin"),
    ("K6", "Kilolitro"),
    ("K60", "Kilomol por metro cúbico bar"),
    ("K61", "Kilomol por minuto"),
    ("K62", "Litro por litro"),
    ("K63", "Litro recíproco"),
    ("K64", "Libra (avoirdupois) por grado Fahrenheit"),
    ("K65", "Libra (avoirdupois) pie cuadrado"),
    ("K66", "Libra (avoirdupois) por día"),
    ("K67", "Libra por pie hora"),
    ("K68", "Libra por pie segundo"),
    ("K69", "Libra (avoirdupois) por pie cúbico grado Fahrenheit"),
    ("K70", "Libra (avoirdupois) por pie cúbico psi"),
    ("K71", "Libra (avoirdupois) por galón (UK)"),
    ("K73", "Libra (avoirdupois) por hora grado Fahrenheit"),
    ("K74", "Libra (avoirdupois) por hora psi"),
    ("K75", "Libra (avoirdupois) por pulgada cúbica grado Fahrenheit"),
    ("K76", "Libra (avoirdupois) por pulgada cúbica psi"),
    ("K77", "Libra (avoirdupois) por psi"),
    ("K78", "Libra (avoirdupois) por minuto"),
    ("K79", "Libra (avoirdupois) por minuto grado Fahrenheit"),
    ("K80", "Libra (avoirdupois) por minuto psi"),
    ("K81", "Libra (avoirdupois) por segundo"),
    ("K82", "Libra (avoirdupois) por segundo grado Fahrenheit"),
    ("K83", "Libra (avoirdupois) por segundo psi"),
    ("K84", "Libra por yarda cúbica"),
    ("K85", "Libra-fuerza por pie cuadrado"),
    ("K86", "Libra-fuerza por pulgada cuadrada grado Fahrenheit"),
    ("K87", "Psi pulgada cúbica por segundo"),
    ("K88", "Psi litro por segundo"),
    ("K89", "Psi metro cúbico por segundo"),
    ("K90", "Psi yarda cúbica por segundo"),
    ("K91", "Libra-fuerza segundo por pie cuadrado"),
    ("K92", "Libra-fuerza segundo por pulgada cuadrada"),
    ("K93", "Psi recíproco"),
    ("K94", "Cuarto (UK líquido) por día"),
    ("K95", "Cuarto (UK líquido) por hora"),
    ("K96", "Cuarto (UK líquido) por minuto"),
    ("K97", "Cuarto (UK líquido) por segundo"),
    ("K98", "Cuarto (US líquido) por día"),
    ("K99", "Cuarto (US líquido) por hora"),
    ("KA", "Pastel"),
    ("KAT", "Katal"),
    ("KB", "Kilocaracter"),
    ("KBA", "Kilobar"),
    ("KCC", "Kilogramo de cloruro de colina"),
    ("KDW", "Kilogramo de peso neto drenado"),
    ("KEL", "Kelvin"),
    ("KGM", "Kilogramo"),
    ("KGS", "Kilogramo por segundo"),
    ("KHY", "Kilogramo de peróxido de hidrógeno"),
    ("KHZ", "Kilohertz"),
    ("KI", "Kilogramo por milímetro de ancho"),
    ("KIC", "Kilogramo, incluyendo el contenedor"),
    ("KIP", "Kilogramo, incluyendo el embalaje interior"),
    ("KJ", "Kilosegmento"),
    ("KJO", "Kilojoule"),
    ("KL", "Kilogramo por metro"),
    ("KLK", "Porcentaje de material seco láctico"),
    ("KLX", "Kilolux"),
    ("KMA", "Kilogramo de metilamina"),
    ("KMH", "Kilómetro por hora"),
    ("KMK", "Kilómetro cuadrado"),
    ("KMQ", "Kilogramo por metro cúbico"),
    ("KMT", "Kilómetro"),
    ("KNI", "Kilogramo de nitrógeno"),
    ("KNM", "Kilonewton por metro cuadrado"),
    ("KNS", "Kilogramo de sustancia nombrada"),
    ("KNT", "Nudo"),
    ("KO", "Miliequivalencia de potasa cáustica por gramo de producto"),
    ("KPA", "Kilopascal"),
    ("KPH", "Kilogramo de hidróxido de potasio (potasa cáustica)"),
    ("KPO", "Kilogramo de óxido de potasio"),
    ("KPP", "Kilogramo de pentóxido de fósforo (anhídrido fosfórico)"),
    ("KR", "Kiloroentgen"),
    ("KSD", "Kilogramo de sustancia 90% seca"),
    ("KSH", "Kilogramo de hidróxido de sodio (sosa cáustica)"),
    ("KT", "Kit"),
    ("KTN", "Kilotonelada"),
    ("KUR", "Kilogramo de uranio"),
    ("KVA", "Kilovoltio-amperio"),
    ("KVR", "Kilovar"),
    ("KVT", "Kilovoltio"),
    ("KW", "Kilogramo por milímetro"),
    ("KWH", "Kilowatt hora"),
    ("KWO", "Kilogramo de trióxido de tungsteno"),
    ("KWT", "Kilowatt"),
    ("KX", "Mililitro por kilogramo"),
    ("L10", "Cuarto (US líquido) por minuto"),
    ("L11", "Cuarto (US líquido) por segundo"),
    ("L12", "Metro por segundo kelvin"),
    ("L13", "Metro por segundo bar"),
    ("L14", "Metro cuadrado hora grado Celsius por kilocaloría (tabla internacional)"),
    ("L15", "Milipascal segundo por kelvin"),
    ("L16", "Milipascal segundo por bar"),
    ("L17", "Miligramo por metro cúbico kelvin"),
    ("L18", "Miligramo por metro cúbico bar"),
    ("L19", "Mililitro por litro"),
    ("L2", "Litro por minuto"),
    ("L20", "Milímetro cúbico recíproco"),
    ("L21", "Milímetro cúbico por metro cúbico"),
    ("L23", "Mol por hora"),
    ("L24", "Mol por kilogramo kelvin"),
    ("L25", "Mol por kilogramo bar"),
    ("L26", "Mol por litro kelvin"),
    ("L27", "Mol por litro bar"),
    ("L28", "Mol por metro cúbico kelvin"),
    ("L29", "Mol por metro cúbico bar"),
    ("L30", "Mol por minuto"),
    ("L31", "Roentgen miliequivalente hombre"),
    ("L32", "Nanogramo por kilogramo"),
    ("L33", "Onza (avoirdupois) por día"),
    ("L34", "Onza (avoirdupois) por hora"),
    ("L35", "Onza (avoirdupois) por minuto"),
    ("L36", "Onza (avoirdupois) por segundo"),
    ("L37", "Onza (avoirdupois) por galón (UK)"),
    ("L38", "Onza (avoirdupois) por galón (US)"),
    ("L39", "Onza (avoirdupois) por pulgada cúbica"),
    ("L40", "Onza (avoirdupois)-fuerza"),
    ("L41", "Onza (avoirdupois)-fuerza pulgada"),
    ("L42", "Picosiemens por metro"),
    ("L43", "Peck (UK)"),
    ("L44", "Peck (UK) por día"),
    ("L45", "Peck (UK) por hora"),
    ("L46", "Peck (UK) por minuto"),
    ("L47", "Peck (UK) por segundo"),
    ("L48", "Peck (US seco) por día"),
    ("L49", "Peck (US seco) por hora"),
    ("L50", "Peck (US seco) por minuto"),
    ("L51", "Peck (US seco) por segundo"),
    ("L52", "Psi por psi"),
    ("L53", "Pinta (UK) por día"),
    ("L54", "Pinta (UK) por hora"),
    ("L55", "Pinta (UK) por minuto"),
    ("L56", "Pinta (UK) por segundo"),
    ("L57", "Pinta (US líquido) por día"),
    ("L58", "Pinta (US líquido) por hora"),
    ("L59", "Pinta (US líquido) por minuto"),
    ("L60", "Pinta (US líquido) por segundo"),
    ("L63", "Slug por día"),
    ("L64", "Slug por pie segundo"),
    ("L65", "Slug por pie cúbico"),
    ("L66", "Slug por hora"),
    ("L67", "Slug por minuto"),
    ("L68", "Slug por segundo"),
    ("L69", "Tonelada por kelvin"),
    ("L70", "Tonelada por bar"),
    ("L71", "Tonelada por día"),
    ("L72", "Tonelada por día kelvin"),
    ("L73", "Tonelada por día bar"),
    ("L74", "Tonelada por hora kelvin"),
    ("L75", "Tonelada por hora bar"),
    ("L76", "Tonelada por metro cúbico kelvin"),
    ("L77", "Tonelada por metro cúbico bar"),
    ("L78", "Tonelada por minuto"),
    ("L79", "Tonelada por minuto kelvin"),
    ("L80", "Tonelada por minuto bar"),
    ("L81", "Tonelada por segundo"),
    ("L82", "Tonelada por segundo kelvin"),
    ("L83", "Tonelada por segundo bar"),
    ("L84", "Tonelada (UK shipping)"),
    ("L85", "Tonelada larga por día"),
    ("L86", "Tonelada (US shipping)"),
    ("L87", "Tonelada corta por grado Fahrenheit"),
    ("L88", "Tonelada corta por día"),
    ("L89", "Tonelada corta por hora grado Fahrenheit"),
    ("L90", "Tonelada corta por hora psi"),
    ("L91", "Tonelada corta por psi"),
    ("L92", "Tonelada (UK larga) por yarda cúbica"),
    ("L93", "Tonelada (US corta) por yarda cúbica"),
    ("L94", "Tonelada-fuerza (US corta)"),
    ("L95", "Año común"),
    ("L96", "Año sideral"),
    ("L98", "Yarda por grado Fahrenheit"),
    ("L99", "Yarda por psi"),
    ("LA", "Libra por pulgada cúbica"),
    ("LAC", "Lactosa excedente porcentaje"),
    ("LBR", "Libra"),
    ("LBT", "Libra troy (US)"),
    ("LD", "Litro por día"),
    ("LEF", "Hoja"),
    ("LF", "Pie lineal"),
    ("LH", "Hora de trabajo"),
    ("LK", "Enlace"),
    ("LM", "Metro lineal"),
    ("LN", "Longitud"),
    ("LO", "Lote [unidad de adquisición]"),
    ("LP", "Libra líquida"),
    ("LPA", "Litro de alcohol puro"),
    ("LR", "Capa"),
    ("LS", "Suma global"),
    ("LTN", "Tonelada (UK) o tonelada larga (US)"),
    ("LTR", "Litro"),
    ("LUB", "Tonelada métrica, aceite lubricante"),
    ("LUM", "Lumen"),
    ("LUX", "Lux"),
    ("LY", "Yarda lineal"),
    ("M1", "Miligramo por litro"),
    ("M10", "Yarda cúbica recíproca"),
    ("M11", "Yarda cúbica por grado Fahrenheit"),
    ("M12", "Yarda cúbica por día"),
    ("M13", "Yarda cúbica por hora"),
    ("M14", "Yarda cúbica por psi"),
    ("M15", "Yarda cúbica por minuto"),
    ("M16", "Yarda cúbica por segundo"),
    ("M17", "Kilohertz metro"),
    ("M18", "Gigahertz metro"),
    ("M19", "Beaufort"),
    ("M20", "Megakelvin recíproco o megakelvin a la potencia menos uno"),
    ("M21", "Kilovoltio-amperio recíproco hora recíproca"),
    ("M22", "Mililitro por centímetro cuadrado minuto"),
    ("M23", "Newton por centímetro"),
    ("M24", "Ohm kilómetro"),
    ("M25", "Por ciento por grado Celsius"),
    ("M26", "Gigaohm por metro"),
    ("M27", "Megahertz metro"),
    ("M29", "Kilogramo por kilogramo"),
    ("M30", "Voltio-amperio recíproco segundo recíproco"),
    ("M31", "Kilogramo por kilómetro"),
    ("M32", "Pascal segundo por litro"),
    ("M33", "Milimol por litro"),
    ("M34", "Newton metro por metro cuadrado"),
    ("M35", "Milivoltio-amperio"),
    ("M36", "Mes de 30 días"),
    ("M37", "Actual/360"),
    ("M38", "Kilómetro por segundo al cuadrado"),
    ("M39", "Centímetro por segundo al cuadrado"),
    ("M4", "Valor monetario"),
    ("M40", "Yarda por segundo al cuadrado"),
    ("M41", "Milímetro por segundo al cuadrado"),
    ("M42", "Milla (milla terrestre) por segundo al cuadrado"),
    ("M43", "Mil [unidad de ángulo]"),
    ("M44", "Revolución"),
    ("M45", "Grado [unidad de ángulo] por segundo al cuadrado"),
    ("M46", "Revolución por minuto"),
    ("M47", "Mil circular"),
    ("M48", "Milla cuadrada (basada en el pie topográfico de los Estados Unidos)"),
    ("M49", "Cadena (basada en el pie topográfico de los Estados Unidos)"),
    ("M5", "Microcurie"),
    ("M50", "Furlong"),
    ("M51", "Pie (topográfico de los Estados Unidos)"),
    ("M52", "Milla (basada en el pie topográfico de los Estados Unidos)"),
    ("M53", "Metro por pascal"),
    ("M55", "Metro por radián"),
    ("M56", "Shake"),
    ("M57", "Milla por minuto"),
    ("M58", "Milla por segundo"),
    ("M59", "Metro por segundo pascal"),
    ("M60", "Metro por hora"),
    ("M61", "Pulgada por año"),
    ("M62", "Kilómetro por segundo"),
    ("M63", "Pulgada por minuto"),
    ("M64", "Yarda por segundo"),
    ("M65", "Yarda por minuto"),
    ("M66", "Yarda por hora"),
    ("M67", "Acre-pie (basado en el pie topográfico de los Estados Unidos)"),
    ("M68", "Cuerda (128 pies cúbicos)"),
    ("M69", "Milla cúbica (milla terrestre UK)"),
    ("M7", "Micro pulgada"),
    ("M70", "Tonelada, registro"),
    ("M71", "Metro cúbico por pascal"),
    ("M72", "Bel"),
    ("M73", "Kilogramo por metro cúbico pascal"),
    ("M74", "Kilogramo por pascal"),
    ("M75", "Kilolibra-fuerza"),
    ("M76", "Poundal"),
    ("M77", "Kilogramo metro por segundo al cuadrado"),
    ("M78", "Pond"),
    ("M79", "Pie cuadrado por hora"),
    ("M80", "Stokes por pascal"),
    ("M81", "Centímetro cuadrado por segundo"),
    ("M82", "Metro cuadrado por segundo pascal"),
    ("M83", "Denier"),
    ("M84", "Libra por yarda"),
    ("M85", "Tonelada, ensayo"),
    ("M86", "Pfund"),
    ("M87", "Kilogramo por segundo pascal"),
    ("M88", "Tonelada por mes"),
    ("M89", "Tonelada por año"),
    ("M9", "Millón de Btu por 1000 pies cúbicos"),
    ("M90", "Kilolibra por hora"),
    ("M91", "Libra por libra"),
    ("M92", "Libra-fuerza pie"),
    ("M93", "Newton metro por radián"),
    ("M94", "Kilogramo metro"),
    ("M95", "Poundal pie"),
    ("M96", "Poundal pulgada"),
    ("M97", "Dina metro"),
    ("M98", "Kilogramo centímetro por segundo"),
    ("M99", "Gramo centímetro por segundo"),
    ("MAH", "Megavoltio amperio reactivo hora"),
    ("MAL", "Megalitro"),
    ("MAM", "Megámetro"),
    ("MAR", "Megavar"),
    ("MAW", "Megawatt"),
    ("MBE", "Mil equivalentes de ladrillo estándar"),
    ("MBF", "Mil pies tablares"),
    ("MBR", "Milibar"),
    ("MC", "Microgramo"),
    ("MCU", "Milicurie"),
    ("MD", "Tonelada métrica seca al aire"),
    ("MGM", "Miligramo"),
    ("MHZ", "Megahertz"),
    ("MIK", "Milla cuadrada (milla terrestre)"),
    ("MIL", "Millar"),
    ("MIN", "Minuto [unidad de tiempo]"),
    ("MIO", "Millón"),
    ("MIU", "Millón de unidades internacionales"),
    ("MKD", "Microgramo por día"),
    ("MKM", "Microgramo por kilogramo de masa corporal por minuto"),
    ("MLD", "Mil millones"),
    ("MLT", "Mililitro"),
    ("MMK", "Milímetro cuadrado"),
    ("MMQ", "Milímetro cúbico"),
    ("MMT", "Milímetro"),
    ("MND", "Kilogramo, peso seco"),
    ("MON", "Mes"),
    ("MPA", "Megapascal"),
    ("MQD", "Metro cúbico por día"),
    ("MQH", "Metro cúbico por hora"),
    ("MQS", "Metro cúbico por segundo"),
    ("MSK", "Metro por segundo al cuadrado"),
    ("MTK", "Metro cuadrado"),
    ("MTQ", "Metro cúbico"),
    ("MTR", "Metro"),
    ("MTS", "Metro por segundo"),
    ("MTZ", "Milihertz"),
    ("MVA", "Megavoltio-amperio"),
    ("MWH", "Megawatt hora (1000 kW.h)"),
    ("N1", "Pluma caloría"),
    ("N10", "Libra pie por segundo"),
    ("N11", "Libra pulgada por segundo"),
    ("N12", "Pferdestaerke"),
    ("N13", "Centímetro de mercurio (0 °C)"),
    ("N14", "Centímetro de agua (4 °C)"),
    ("N15", "Pie de agua (39.2 °F)"),
    ("N16", "Pulgada de mercurio (32 °F)"),
    ("N17", "Pulgada de mercurio (60 °F)"),
    ("N18", "Pulgada de agua (39.2 °F)"),
    ("N19", "Pulgada de agua (60 °F)"),
    ("N20", "Kip por pulgada cuadrada"),
    ("N21", "Poundal por pie cuadrado"),
    ("N22", "Onza (avoirdupois) por pulgada cuadrada"),
    ("N23", "Metro convencional de agua"),
    ("N24", "Gramo por milímetro cuadrado"),
    ("N25", "Libra por yarda cuadrada"),
    ("N26", "Poundal por pulgada cuadrada"),
    ("N27", "Pie a la cuarta potencia"),
    ("N28", "Decímetro cúbico por kilogramo"),
    ("N29", "Pie cúbico por libra"),
    ("N3", "Punto de impresión"),
    ("N30", "Pulgada cúbica por libra"),
    ("N31", "Kilonewton por metro"),
    ("N32", "Poundal por pulgada"),
    ("N33", "Libra-fuerza por yarda"),
    ("N34", "Poundal segundo por pie cuadrado"),
    ("N35", "Poise por pascal"),
    ("N36", "Newton segundo por metro cuadrado"),
    ("N37", "Kilogramo por metro segundo"),
    ("N38", "Kilogramo por metro minuto"),
    ("N39", "Kilogramo por metro día"),
    ("N40", "Kilogramo por metro hora"),
    ("N41", "Gramo por centímetro segundo"),
    ("N42", "Poundal segundo por pulgada cuadrada"),
    ("N43", "Libra por pie minuto"),
    ("N44", "Libra por pie día"),
    ("N45", "Metro cúbico por segundo pascal"),
    ("N46", "Pie poundal"),
    ("N47", "Pulgada poundal"),
    ("N48", "Watt por centímetro cuadrado"),
    ("N49", "Watt por pulgada cuadrada"),
    ("N50", "Unidad térmica británica (tabla internacional) por pie cuadrado hora"),
    ("N51", "Unidad térmica británica (termoquímica) por pie cuadrado hora"),
    ("N52", "Unidad térmica británica (termoquímica) por pie cuadrado minuto"),
    ("N53", "Unidad térmica británica (tabla internacional) por pie cuadrado segundo"),
    ("N54", "Unidad térmica británica (termoquímica) por pie cuadrado segundo"),
    ("N55", "Unidad térmica británica (tabla internacional) por pulgada cuadrada segundo"),
    ("N56", "Caloría (termoquímica) por centímetro cuadrado minuto"),
    ("N57", "Caloría (termoquímica) por centímetro cuadrado segundo"),
    ("N58", "Unidad térmica británica (tabla internacional) por pie cúbico"),
    ("N59", "Unidad térmica británica (termoquímica) por pie cúbico"),
    ("N60", "Unidad térmica británica (tabla internacional) por grado Fahrenheit"),
    ("N61", "Unidad térmica británica (termoquímica) por grado Fahrenheit"),
    ("N62", "Unidad térmica británica (tabla internacional) por grado Rankine"),
    ("N63", "Unidad térmica británica (termoquímica) por grado Rankine"),
    ("N64", "Unidad térmica británica (termoquímica) por libra grado Rankine"),
    ("N65", "Kilocaloría (tabla internacional) por gramo kelvin"),
    ("N66", "Unidad térmica británica (39 °F)"),
    ("N67", "Unidad térmica británica (59 °F)"),
    ("N68", "Unidad térmica británica (60 °F)"),
    ("N69", "Caloría (20 °C)"),
    ("N70", "Quad (1015 BtuIT)"),
    ("N71", "Therm (EC)"),
    ("N72", "Therm (US)"),
    ("N73", "Unidad térmica británica (termoquímica) por libra"),
    ("N74", "Unidad térmica británica (tabla internacional) por hora pie cuadrado grado Fahrenheit"),
    ("N75", "Unidad térmica británica (termoquímica) por hora pie cuadrado grado Fahrenheit"),
    ("N76", "Unidad térmica británica (tabla internacional) por segundo pie cuadrado grado Fahrenheit"),
    ("N77", "Unidad térmica británica (termoquímica) por segundo pie cuadrado grado Fahrenheit"),
    ("N78", "Kilowatt por metro cuadrado kelvin"),
    ("N79", "Kelvin por pascal"),
    ("N80", "Watt por metro grado Celsius"),
    ("N81", "Kilowatt por metro kelvin"),
    ("N82", "Kilowatt por metro grado Celsius"),
    ("N83", "Metro por grado Celsius metro"),
    ("N84", "Grado Fahrenheit hora por unidad térmica británica (tabla internacional)"),
    ("N85", "Grado Fahrenheit hora por unidad térmica británica (termoquímica)"),
    ("N86", "Grado Fahrenheit segundo por unidad térmica británica (tabla internacional)"),
    ("N87", "Grado Fahrenheit segundo por unidad térmica británica (termoquímica)"),
    ("N88", "Grado Fahrenheit hora pie cuadrado por unidad térmica británica (tabla internacional) pulgada"),
    ("N89", "Grado Fahrenheit hora pie cuadrado por unidad térmica británica (termoquímica) pulgada"),
    ("N90", "Kilofaradio"),
    ("N91", "Joule recíproco"),
    ("N92", "Picosiemens"),
    ("N93", "Amperio por pascal"),
    ("N94", "Franklin"),
    ("N95", "Amperio minuto"),
    ("N96", "Biot"),
    ("N97", "Gilbert"),
    ("N98", "Voltio por pascal"),
    ("N99", "Picovoltio"),
    ("NA", "Miligramo por kilogramo"),
    ("NAR", "Número de artículos"),
    ("NCL", "Número de celdas"),
    ("NEW", "Newton"),
    ("NF", "Mensaje"),
    ("NIL", "Nulo"),
    ("NIU", "Número de unidades internacionales"),
    ("NL", "Carga"),
    ("NM3", "Metro cúbico normalizado"),
    ("NMI", "Milla náutica"),
    ("NMP", "Número de paquetes"),
    ("NPT", "Número de partes"),
    ("NT", "Tonelada neta"),
    ("NTU", "Unidad nefelométrica de turbidez"),
    ("NU", "Newton metro"),
    ("NX", "Parte por mil"),
    ("OA", "Panel"),
    ("ODE", "Equivalente de agotamiento de ozono"),
    ("ODG", "ODS Gramos"),
    ("ODK", "ODS Kilogramos"),
    ("ODM", "ODS Miligramos"),
    ("OHM", "Ohm"),
    ("ON", "Onza por yarda cuadrada"),
    ("ONZ", "Onza (avoirdupois)"),
    ("OPM", "Oscilaciones por minuto"),
    ("OT", "Hora extra"),
    ("OZA", "Onza líquida (US)"),
    ("OZI", "Onza líquida (UK)"),
    ("P1", "Porcentaje"),
    ("P10", "Coulomb por metro"),
    ("P11", "Kiloweber"),
    ("P12", "Gamma"),
    ("P13", "Kilotesla"),
    ("P14", "Joule por segundo"),
    ("P15", "Joule por minuto"),
    ("P16", "Joule por hora"),
    ("P17", "Joule por día"),
    ("P18", "Kilojoule por segundo"),
    ("P19", "Kilojoule por minuto"),
    ("P2", "Libra por pie"),
    ("P20", "Kilojoule por hora"),
    ("P21", "Kilojoule por día"),
    ("P22", "Nanoohm"),
    ("P23", "Ohm mil circular por pie"),
    ("P24", "Kilohenry"),
    ("P25", "Lumen por pie cuadrado"),
    ("P26", "Phot"),
    ("P27", "Pie candela"),
    ("P28", "Candela por pulgada cuadrada"),
    ("P29", "Pie lambert"),
    ("P30", "Lambert"),
    ("P31", "Stilb"),
    ("P32", "Candela por pie cuadrado"),
    ("P33", "Kilocandela"),
    ("P34", "Milicandela"),
    ("P35", "Hefner-Kerze"),
    ("P36", "Vela internacional"),
    ("P37", "Unidad térmica británica (tabla internacional) por pie cuadrado"),
    ("P38", "Unidad térmica británica (termoquímica) por pie cuadrado"),
    ("P39", "Caloría (termoquímica) por centímetro cuadrado"),
    ("P40", "Langley"),
    ("P41", "Década (logarítmica)"),
    ("P42", "Pascal al cuadrado segundo"),
    ("P43", "Bel por metro"),
    ("P44", "Libra mol"),
    ("P45", "Libra mol por segundo"),
    ("P46", "Libra mol por minuto"),
    ("P47", "Kilomol por kilogramo"),
    ("P48", "Libra mol por libra"),
    ("P49", "Newton metro cuadrado por amperio"),
    ("P5", "Paquete de cinco"),
    ("P50", "Weber metro"),
    ("P51", "Mol por kilogramo pascal"),
    ("P52", "Mol por metro cúbico pascal"),
    ("P53", "Unidad polo"),
    ("P54", "Miligray por segundo"),
    ("P55", "Microgray por segundo"),
    ("P56", "Nanogray por segundo"),
    ("P57", "Gray por minuto"),
    ("P58", "Miligray por minuto"),
    ("P59", "Microgray por minuto"),
    ("P60", "Nanogray por minuto"),
    ("P61", "Gray por hora"),
    ("P62", "Miligray por hora"),
    ("P63", "Microgray por hora"),
    ("P64", "Nanogray por hora"),
    ("P65", "Sievert por segundo"),
    ("P66", "Milisievert por segundo"),
    ("P67", "Microsievert por segundo"),
    ("P68", "Nanosievert por segundo"),
    ("P69", "Rem por segundo"),
    ("P70", "Sievert por hora"),
    ("P71", "Milisievert por hora"),
    ("P72", "Microsievert por hora"),
    ("P73", "Nanosievert por hora"),
    ("P74", "Sievert por minuto"),
    ("P75", "Milisievert por minuto"),
    ("P76", "Microsievert por minuto"),
    ("P77", "Nanosievert por minuto"),
    ("P78", "Pulgada cuadrada recíproca"),
    ("P79", "Pascal metro cuadrado por kilogramo"),
    ("P80", "Milipascal por metro"),
    ("P81", "Kilopascal por metro"),
    ("P82", "Hectopascal por metro"),
    ("P83", "Atmósfera estándar por metro"),
    ("P84", "Atmósfera técnica por metro"),
    ("P85", "Torr por metro"),
    ("P86", "Psi por pulgada"),
    ("P87", "Metro cúbico por segundo metro cuadrado"),
    ("P88", "Rhe"),
    ("P89", "Libra-fuerza pie por pulgada"),
    ("P90", "Libra-fuerza pulgada por pulgada"),
    ("P91", "Perm (0 °C)"),
    ("P92", "Perm (23 °C)"),
    ("P93", "Byte por segundo"),
    ("P94", "Kilobyte por segundo"),
    ("P95", "Megabyte por segundo"),
    ("P96", "Voltio recíproco"),
    ("P97", "Radián recíproco"),
    ("P98", "Pascal a la potencia de la suma de los números estequiométricos"),
    ("P99", "Mol por metro cúbico a la potencia de la suma de los números estequiométricos"),
    ("PAL", "Pascal"),
    ("PD", "Almohadilla"),
    ("PFL", "Litro de prueba"),
    ("PGL", "Galón de prueba"),
    ("PI", "Tono"),
    ("PLA", "Grado Plato"),
    ("PO", "Libra por pulgada de longitud"),
    ("PQ", "Página por pulgada"),
    ("PR", "Par"),
    ("PS", "Libra-fuerza por pulgada cuadrada"),
    ("PTD", "Pinta seca (US)"),
    ("PTI", "Pinta (UK)"),
    ("PTL", "Pinta líquida (US)"),
    ("PTN", "Porción"),
    ("Q10", "Joule por tesla"),
    ("Q11", "Erlang"),
    ("Q12", "Octeto"),
    ("Q13", "Octeto por segundo"),
    ("Q14", "Shannon"),
    ("Q15", "Hartley"),
    ("Q16", "Unidad natural de información"),
    ("Q17", "Shannon por segundo"),
    ("Q18", "Hartley por segundo"),
    ("Q19", "Unidad natural de información por segundo"),
    ("Q20", "Segundo por kilogramo"),
    ("Q21", "Watt metro cuadrado"),
    ("Q22", "Segundo por radián metro cúbico"),
    ("Q23", "Weber a la potencia menos uno"),
    ("Q24", "Pulgada recíproca"),
    ("Q25", "Dioptría"),
    ("Q26", "Uno por uno"),
    ("Q27", "Newton metro por metro"),
    ("Q28", "Kilogramo por metro cuadrado pascal segundo"),
    ("Q29", "Microgramo por hectogramo"),
    ("Q3", "Comida"),
    ("Q30", "pH (potencial de hidrógeno)"),
    ("Q31", "Kilojoule por gramo"),
    ("Q32", "Femtolitro"),
    ("Q33", "Picolitro"),
    ("Q34", "Nanolitro"),
    ("Q35", "Megawatts por minuto"),
    ("Q36", "Metro cuadrado por metro cúbico"),
    ("Q37", "Metro cúbico estándar por día"),
    ("Q38", "Metro cúbico estándar por hora"),
    ("Q39", "Metro cúbico normalizado por día"),
    ("Q40", "Metro cúbico normalizado por hora"),
    ("Q41", "Joule por metro cúbico normalizado"),
    ("Q42", "Joule por metro cúbico estándar"),
    ("QA", "Página - facsímil"),
    ("QAN", "Cuarto (de un año)"),
    ("QB", "Página - copia impresa"),
    ("QR", "Cuire"),
    ("QTD", "Cuarto seco (US)"),
    ("QTI", "Cuarto (UK)"),
    ("QTL", "Cuarto líquido (US)"),
    ("QTR", "Cuarto (UK)"),
    ("R1", "Pica"),
    ("R9", "Mil metros cúbicos"),
    ("RH", "Hora de funcionamiento"),
    ("RM", "Resma"),
    ("ROM", "Habitación"),
    ("RP", "Libra por resma"),
    ("RPM", "Revoluciones por minuto"),
    ("RPS", "Revoluciones por segundo"),
    ("RT", "Milla de toneladas facturadas"),
    ("S3", "Pie cuadrado por segundo"),
    ("S4", "Metro cuadrado por segundo"),
    ("SAN", "Medio año (6 meses)"),
    ("SCO", "Puntuación"),
    ("SCR", "Escrúpulo"),
    ("SEC", "Segundo [unidad de tiempo]"),
    ("SET", "Conjunto"),
    ("SG", "Segmento"),
    ("SIE", "Siemens"),
    ("SM3", "Metro cúbico estándar"),
    ("SMI", "Milla (milla estatal)"),
    ("SQ", "Cuadrado"),
    ("SQR", "Cuadrado, techado"),
    ("SR", "Tira"),
    ("STC", "Palo"),
    ("STI", "Stone (UK)"),
    ("STK", "Palo, cigarrillo"),
    ("STL", "Litro estándar"),
    ("STN", "Tonelada (US) o tonelada corta (UK/US)"),
    ("STW", "Paja"),
    ("SW", "Madeja (hilo)"),
    ("SX", "Envío"),
    ("SYR", "Jeringa"),
    ("T0", "Línea de telecomunicaciones en servicio"),
    ("T3", "Mil piezas"),
    ("TAH", "Kiloamperio hora (mil amperios hora)"),
    ("TAN", "Índice de acidez total"),
    ("TI", "Mil pulgadas cuadradas"),
    ("TIC", "Tonelada métrica, incluido el contenedor"),
    ("TIP", "Tonelada métrica, incluido el embalaje interior"),
    ("TKM", "Tonelada kilómetro"),
    ("TMS", "Kilogramo de carne importada, menos despojos"),
    ("TNE", "Tonelada"),
    ("TP", "Paquete de diez"),
    ("TPI", "Dientes por pulgada"),
    ("TPR", "Diez pares"),
    ("TQD", "Mil metros cúbicos por día"),
    ("TRL", "Trillón (EUR)"),
    ("TST", "Diez conjuntos"),
    ("TTS", "Diez mil palitos"),
    ("U1", "Tratamiento"),
    ("U2", "Tableta"),
    ("UB", "Línea de telecomunicaciones en servicio promedio"),
    ("UC", "Puerto de telecomunicaciones"),
    ("VA", "Voltio-amperio por kilogramo"),
    ("VLT", "Voltio"),
    ("VP", "Por ciento en volumen"),
    ("W2", "Kilo húmedo"),
    ("WA", "Watt por kelvin"),
    ("WB", "Libra húmeda"),
    ("WCD", "Cuerda [unidad de volumen]"),
    ("WE", "Tonelada húmeda"),
    ("WEB", "Weber"),
    ("WEE", "Semana"),
    ("WG", "Galón de vino"),
    ("WHR", "Watt hora"),
    ("WM", "Mes de trabajo"),
    ("WSD", "Estándar"),
    ("WTT", "Watt"),
    ("X1", "Cadena de Gunter"),
    ("X1A", "Tambor de acero"),
    ("X1B", "Tambor de aluminio"),
    ("X1D", "Tambor contrachapado"),
    ("X1F", "Contenedor flexible"),
    ("X1G", "Tambor de fibra"),
    ("X1W", "Tambor de madera"),
    ("X2C", "Barril de madera"),
    ("X3A", "Bidón de acero"),
    ("X3H", "Bidón de plástico"),
    ("X43", "Bolsa súper a granel"),
    ("X44", "Bolsa de polietileno"),
    ("X4A", "Caja de acero"),
    ("X4B", "Caja de aluminio"),
    ("X4C", "Caja de madera natural"),
    ("X4D", "Caja de contrachapado"),
    ("X4F", "Caja de madera reconstituida"),
    ("X4G", "Caja de cartón"),
    ("X4H", "Caja de plástico"),
    ("X5H", "Bolsa de plástico tejido"),
    ("X5L", "Bolsa textil"),
    ("X5M", "Bolsa de papel"),
    ("X6H", "Recipiente de plástico, embalaje compuesto"),
    ("X6P", "Recipiente de vidrio, embalaje compuesto"),
    ("X7A", "Caja de coche"),
    ("X7B", "Caja de madera"),
    ("X8A", "Tarima de madera"),
    ("X8B", "Cajón de madera"),
    ("X8C", "Madera flejada"),
    ("XAA", "Contenedor intermedio para graneles de plástico rígido"),
    ("XAB", "Recipiente de fibra"),
    ("XAC", "Recipiente de papel"),
    ("XAD", "Recipiente de madera"),
    ("XAE", "Aerosol"),
    ("XAF", "Tarima modular con collarines 80cms * 60cms"),
    ("XAG", "Tarima emplayada"),
    ("XAH", "Tarima 100cms X 110cm"),
    ("XAI", "Clamshell"),
    ("XAJ", "Cono"),
    ("XAL", "Bola"),
    ("XAM", "Ampolleta sin protección"),
    ("XAP", "Ampolleta protegida"),
    ("XAT", "Atomizador"),
    ("XAV", "Cápsula"),
    ("XB4", "Cinturón"),
    ("XBA", "Barril"),
    ("XBB", "Bobina"),
    ("XBC", "Cajón para botellas / Estante para botellas"),
    ("XBD", "Tablero"),
    ("XBE", "Flejado"),
    ("XBF", "Globo no protegido"),
    ("XBG", "Bolso"),
    ("XBH", "Manojo"),
    ("XBI", "Compartimiento"),
    ("XBJ", "Cubeta"),
    ("XBK", "Cesta"),
    ("XBL", "Paca comprimida"),
    ("XBM", "Cuenco"),
    ("XBN", "Paca no comprimida"),
    ("XBO", "Botella no protegida y cilíndrica"),
    ("XBP", "Globo protegido"),
    ("XBQ", "Botella cilíndrica protegida"),
    ("XBR", "Barra"),
    ("XBS", "Botella, no protegida en forma de bulbo"),
    ("XBT", "Rollo de tela"),
    ("XBU", "Butt"),
    ("XBV", "Botella de bulbo protegido"),
    ("XBW", "Caja para líquidos"),
    ("XBX", "Caja"),
    ("XBY", "Tablero, con fleje/ agrupados"),
    ("XBZ", "Barras, con fleje/ agrupados"),
    ("XCA", "Lata rectangular"),
    ("XCB", "Cajón para cerveza"),
    ("XCC", "Mantequera"),
    ("XCD", "Lata con mango y boquilla"),
    ("XCE", "Canasta tejida"),
    ("XCF", "Cofre"),
    ("XCG", "Contenedor tipo jaula"),
    ("XCH", "Cajonera"),
    ("XCI", "Frasco"),
    ("XCJ", "Ataúd"),
    ("XCK", "Barrica"),
    ("XCL", "Espiral"),
    ("XCM", "Paquete de tarjetas"),
    ("XCN", "Contenedor, no especificado como equipo de transporte"),
    ("XCO", "Garrafón no protegido"),
    ("XCP", "Garrafón protegido"),
    ("XCQ", "Cartucho"),
    ("XCR", "Cajón"),
    ("XCS", "Estuche"),
    ("XCT", "Cartón"),
    ("XCU", "Vaso"),
    ("XCV", "Cubierta"),
    ("XCW", "Jaula estilo rodillo"),
    ("XCX", "Lata cilíndrica"),
    ("XCY", "Cilindro"),
    ("XCZ", "Lona"),
    ("XDA", "Cajón multicapa de plástico"),
    ("XDB", "Cajón de varias capas de madera"),
    ("XDC", "Cajón multicapa de cartón"),
    ("XDG", "Jaula, Según la clasificación de la empresa (CHEP)"),
    ("XDH", "Caja, Según la clasificación de la empresa (CHEP), Eurobox"),
    ("XDI", "Tambor de hierro"),
    ("XDJ", "Damajuana o garrafa, no protegido"),
    ("XDK", "Cajón a granel, cartón"),
    ("XDL", "Cajas de plástico"),
    ("XDM", "Cajones a granel de madera"),
    ("XDN", "Dispensador"),
    ("XDP", "Damajuana o garrafa, protegido"),
    ("XDR", "Tambor"),
    ("XDS", "Bandeja de una capa sin cubierta y de plástico"),
    ("XDT", "Bandeja de una capa sin cubierta y de madera"),
    ("XDU", "Bandeja de una capa sin cubierta y poliestireno"),
    ("XDV", "Bandeja de una capa sin cubierta y de cartón"),
    ("XDW", "Bandeja de dos capas sin tapa y con bandeja de plástico"),
    ("XDX", "Bandeja de dos capas sin cubierta y de madera"),
    ("XDY", "Bandeja de dos capas sin cubierta y de cartón"),
    ("XEC", "Bolsa de plástico"),
    ("XED", "Estuche con base de tarima"),
    ("XEE", "Estuche con base de tarima de madera"),
    ("XEF", "Estuche con base de tarima de cartón"),
    ("XEG", "Estuche con base de tarima de plástico"),
    ("XEH", "Estuche con base de tarima metálica"),
    ("XEI", "Estuche isotérmico"),
    ("XEN", "Sobre"),
    ("XFB", "Bolsa flexible"),
    ("XFC", "Cajón para fruta"),
    ("XFD", "Cajón enmarcado"),
    ("XFE", "Flexitanque"),
    ("XFI", "Barrilete"),
    ("XFL", "Matraz"),
    ("XFO", "Cajón para zapatos"),
    ("XFP", "Caja para película fotográfica"),
    ("XFR", "Marco"),
    ("XFT", "Contenedor para alimentos"),
    ("XFW", "Carro de cama plana"),
    ("XFX", "Bolsa flexible tipo contenedor"),
    ("XGB", "Botella para gas"),
    ("XGI", "Viga"),
    ("XGL", "Contenedor tipo galón"),
    ("XGR", "Recipiente de vidrio"),
    ("XGU", "Bandeja con objetos planos apilados horizontalmente"),
    ("XGY", "Costal de Yute"),
    ("XGZ", "Vigas con flejes o agrupadas"),
    ("XHA", "Cesta con asa y de plástico"),
    ("XHB", "Cesta con asa y de madera"),
    ("XHC", "Cesta con asa y de cartón"),
    ("XHG", "Hogshead"),
    ("XHN", "Gancho"),
    ("XHR", "Cesto"),
    ("XIA", "Paquete con pantalla y de madera"),
    ("XIB", "Paquete con pantalla y de cartón"),
    ("XIC", "Paquete con pantalla y de plástico"),
    ("XID", "Paquete con pantalla y de metal"),
    ("XIE", "Paquete de exhibidor"),
    ("XIF", "Paquete de flujo"),
    ("XIG", "Paquete envuelto en papel"),
    ("XIH", "Tambor de plástico"),
    ("XIK", "Paquete de cartón con orificios para botellas"),
    ("XIL", "Bandeja rígida con tapa y apilable (CEN TS 14482:2002)"),
    ("XIN", "Lingote"),
    ("XIZ", "Lingotes con correa/ agrupados"),
    ("XJB", "Bolsa jumbo"),
    ("XJC", "Bidón rectangular"),
    ("XJG", "Jarra"),
    ("XJR", "Tarro"),
    ("XJT", "Bolsa de yute"),
    ("XJY", "Bidón cilíndrico"),
    ("XKG", "Barrilete (keg)"),
    ("XKI", "Kit (Conjunto de piezas)"),
    ("XLE", "Valijas"),
    ("XLG", "Tronco"),
    ("XLT", "Lote"),
    ("XLU", "Caja de arrastre"),
    ("XLV", "Contenedor pequeño"),
    ("XLZ", "Troncos con fleje/ agrupados"),
    ("XMA", "Cajón metálico"),
    ("XMB", "Costal multicapa"),
    ("XMC", "Cajón para leche"),
    ("XME", "Contenedor de metal"),
    ("XMR", "Recipiente de metal"),
    ("XMS", "Saco multi-pared"),
    ("XMT", "Tapete"),
    ("XMW", "Recipiente envuelto en plástico"),
    ("XMX", "Caja pequeña de cerillos"),
    ("XNA", "No disponible"),
    ("XNE", "Sin empaque o no empaquetado"),
    ("XNF", "Sin empaque o no empaquetado, unidad simple"),
    ("XNG", "Sin empaque o no empaquetado, unidades múltiples"),
    ("XNS", "Caja nido"),
    ("XNT", "Red"),
    ("XNU", "Red de plástico con tubo"),
    ("XNV", "Red textil con tubo"),
    ("XOA", "Tarima, CHEP 40 cm x 60 cm"),
    ("XOB", "Tarima, CHEP 80 cm x 120 cm"),
    ("XOC", "Tarima, CHEP 100 cm x 120 cm"),
    ("XOD", "Tarima, AS 4068-1993"),
    ("XOE", "Tarima, ISO T11"),
    ("XOF", "Plataforma de peso o dimensión no especificada"),
    ("XOK", "Bloque"),
    ("XOT", "Octabin"),
    ("XOU", "Contenedor externo"),
    ("XP2", "Charola"),
    ("XPA", "Cajetilla"),
    ("XPB", "Tarima con caja combinada abierta con caja y tarima"),
    ("XPC", "Paquete postal"),
    ("XPD", "Tarima modular con collarines 80cms * 100cms"),
    ("XPE", "Tarima modular con collarines 80cms * 120cms"),
    ("XPF", "Corral"),
    ("XPG", "Placa"),
    ("XPH", "Cántaro"),
    ("XPI", "Pleca"),
    ("XPJ", "Canastilla"),
    ("XPK", "Paquete"),
    ("XPL", "Balde"),
    ("XPN", "Tablón"),
    ("XPO", "Bolsa pequeña"),
    ("XPR", "Recipiente de plástico"),
    ("XPT", "Maceta"),
    ("XPU", "Bandeja"),
    ("XPV", "Tubos con fleje/ agrupados"),
    ("XPX", "Tarima"),
    ("XPY", "Placas con fleje/ agrupados"),
    ("XPZ", "Tablones con fleje/ agrupados"),
    ("XQA", "Tambor de acero con cabeza no desmontable"),
    ("XQB", "Tambor de acero con cabeza extraíble"),
    ("XQC", "Tambor de aluminio con cabeza no extraíble"),
    ("XQD", "Tambor de aluminio con cabeza extraíble"),
    ("XQF", "Tambor de plástico con cabeza no extraíble"),
    ("XQG", "Tambor de plástico con cabeza extraíble"),
    ("XQH", "Barril de madera con tapón"),
    ("XQJ", "Barril de madera con cabeza desprendible"),
    ("XQK", "Bidón de acero con cabeza no desmontable"),
    ("XQL", "Bidón de acero con cabeza desmontable"),
    ("XQM", "Bidón de plástico con cabeza no desmontable"),
    ("XQN", "Bidón de plástico con cabeza extraíble"),
    ("XQP", "Caja de madera natural"),
    ("XQQ", "Caja de madera natural con muros a prueba de filtraciones"),
    ("XQR", "Caja de plástico expandido"),
    ("XQS", "Caja de plástico sólido"),
    ("XRD", "Rodillo"),
    ("XRG", "Anillo"),
    ("XRJ", "Estante, Perchero para ropa"),
    ("XRK", "Estante"),
    ("XRL", "Carrete"),
    ("XRO", "Rollo"),
    ("XRT", "Red roja"),
    ("XRZ", "Varillas con fleje/ agrupados"),
    ("XSA", "Saco"),
    ("XSB", "Losa"),
    ("XSC", "Cajón poco profundo"),
    ("XSD", "Huso"),
    ("XSE", "Baúl"),
    ("XSH", "Bolsa pequeña hermética"),
    ("XSI", "Patín"),
    ("XSK", "Carcasa esqueleto"),
    ("XSL", "Hoja de deslizamiento"),
    ("XSM", "Hoja de metal"),
    ("XSO", "Carrete pequeño"),
    ("XSP", "Hoja de empaque de plástico"),
    ("XSS", "Cajón de acero"),
    ("XST", "Hoja"),
    ("XSU", "Maleta"),
    ("XSV", "Sobre de acero"),
    ("XSW", "Envoltorio"),
    ("XSX", "Juego"),
    ("XSY", "Manga"),
    ("XSZ", "Hojas con fleje/ agrupados"),
    ("XT1", "Tableta"),
    ("XTB", "Tina"),
    ("XTC", "Caja para té"),
    ("XTD", "Tubo plegable"),
    ("XTE", "Neumático"),
    ("XTG", "Contenedor tanque genérico"),
    ("XTI", "Tierce"),
    ("XTK", "Tanque rectangular"),
    ("XTL", "Tina con tapa"),
    ("XTN", "Hojalata"),
    ("XTO", "Tonel"),
    ("XTR", "Baúl de viaje"),
    ("XTS", "Estructura"),
    ("XTT", "Bolsa de mano"),
    ("XTU", "Tubo"),
    ("XTV", "Tubo con boquilla"),
    ("XTW", "Tarima triwall"),
    ("XTY", "Tanque cilíndrico"),
    ("XTZ", "Tubos con fleje/ agrupados"),
    ("XUC", "Sin jaula"),
    ("XUN", "Unidad"),
    ("XVA", "Tanque"),
    ("XVG", "Bulto de gas (a 1031 mbar y 15° C)"),
    ("XVI", "Frasco pequeño"),
    ("XVK", "Transporte Vanpack"),
    ("XVL", "Bulto de líquido"),
    ("XVN", "Vehículo"),
    ("XVO", "Bulto de sólido de partículas grandes (\"nódulos\")"),
    ("XVP", "Envasado al vacío"),
    ("XVQ", "Bulto, gas licuado (a temperatura / presión anormal)"),
    ("XVR", "Bulto de sólido de partículas granulares (\"granos\")"),
    ("XVS", "Bulto de chatarra"),
    ("XVY", "Bulto de sólido de partículas finas (\"polvos\")"),
    ("XWA", "Contenedor de granel intermedio"),
    ("XWB", "Botella de mimbre"),
    ("XWC", "Contenedor intermedio para gráneles y de acero"),
    ("XWD", "Contenedor intermedio para gráneles y de aluminio"),
    ("XWF", "Contenedor intermedio para gráneles y de metal"),
    ("XWG", "Contenedor intermedio para gráneles de acero presurizado menor a 10 kpa"),
    ("XWH", "Contenedor intermedio para gráneles de aluminio, presurizado menor a 10 kpa"),
    ("XWJ", "Contenedor intermedio para gráneles de metal con una presión de 10 kpa"),
    ("XWK", "Contenedor intermedio para gráneles de acero para líquido"),
    ("XWL", "Contenedor intermedio para gráneles de aluminio para líquido"),
    ("XWM", "Contenedor intermedio para gráneles de metal para líquido"),
    ("XWN", "Contenedor intermedio para gráneles con tejido plástico sin capa con revestimiento"),
    ("XWP", "Contenedor intermedio para gráneles de material plástico tejido y recubierto"),
    ("XWQ", "Contenedor intermedio para gráneles de material plástico tejido con revestimiento"),
    ("XWR", "Contenedor intermedio para gráneles de material plástico tejido, revestido y con forro"),
    ("XWS", "Contenedor intermedio para gráneles de película de plástico"),
    ("XWT", "Contenedor intermedio para gráneles textil sin capa / forro"),
    ("XWU", "Contenedor intermedio para gráneles de madera natural con forro interior"),
    ("XWV", "Contenedor intermedio para gráneles textil recubierto"),
    ("XWW", "Contenedor intermedio para gráneles textil con revestimiento"),
    ("XWX", "Contenedor intermedio para gráneles textil recubierto y con forro"),
    ("XWY", "Contenedor intermedio para gráneles contrachapado con revestimiento interior"),
    ("XWZ", "Contenedor intermedio para gráneles de madera reconstituida con revestimiento interior"),
    ("XXA", "Bolsa de tejido plástico, sin abrigo interior ni forro"),
    ("XXB", "Bolsa de tejido plástico a prueba de filtraciones"),
    ("XXC", "Bolsa de tejido plástico resistente al agua"),
    ("XXD", "Bolsa con película de plástico"),
    ("XXF", "Bolsa textil sin capa ni forro interior"),
    ("XXG", "Bolsa textil a prueba de filtraciones"),
    ("XXH", "Bolsa textil resistente al agua"),
    ("XXJ", "Bolsa de papel multi-pared"),
    ("XXK", "Bolsa de papel multi-pared resistente al agua"),
    ("XYA", "Empaque compuesto, recipiente de plástico en tambor de acero"),
    ("XYB", "Empaque compuesto, recipiente de plástico en cajas de acero"),
    ("XYC", "Empaque compuesto, recipiente de plástico en tambor de aluminio"),
    ("XYD", "Empaque compuesto, recipiente de plástico en cajón de aluminio"),
    ("XYF", "Empaque compuesto, recipiente de plástico en caja de madera"),
    ("XYG", "Empaque compuesto, recipiente de plástico en tambor de madera contrachapada"),
    ("XYH", "Empaque compuesto, recipiente de plástico en caja de madera contrachapada"),
    ("XYJ", "Empaque compuesto, recipiente de plástico en tambor de fibra"),
    ("XYK", "Empaque compuesto, recipiente de plástico en caja de cartón"),
    ("XYL", "Empaque compuesto, recipiente de plástico en el tambor de plástico"),
    ("XYM", "Empaque compuesto, recipiente de plástico en caja de plástico sólido"),
    ("XYN", "Empaque compuesto, recipiente de vidrio en tambor de acero"),
    ("XYP", "Empaque compuesto, recipiente de vidrio en caja de acero"),
    ("XYQ", "Empaque compuesto, recipiente de vidrio en tambor de aluminio"),
    ("XYR", "Empaque compuesto, recipiente de vidrio en caja de aluminio"),
    ("XYS", "Empaque compuesto, recipiente de vidrio en caja de madera"),
    ("XYT", "Empaque compuesto, recipiente de vidrio en tambor de madera contrachapada"),
    ("XYV", "Empaque compuesto, recipiente de vidrio en el cesto de mimbre"),
    ("XYW", "Empaque compuesto, recipiente de vidrio en tambor de fibra"),
    ("XYX", "Empaque compuesto, recipiente de vidrio en caja de cartón"),
    ("XYY", "Empaque compuesto, recipiente de vidrio en paquete de plástico expandible"),
    ("XYZ", "Empaque compuesto, recipiente de vidrio en paquete de plástico sólido"),
    ("XZA", "Contenedor de granel intermedio, papel, multi-pared"),
    ("XZB", "Bolsa grande"),
    ("XZC", "Contenedor de granel intermedio de papel, multi-pared y resistente al agua"),
    ("XZD", "Contenedor de granel intermedio de plástico rígido, con equipo estructural para sólidos"),
    ("XZF", "Contenedor de granel intermedio de plástico rígido, autoportante para sólidos"),
    ("XZG", "Contenedor de granel intermedio de plástico rígido, con equipo estructural, presurizado"),
    ("XZH", "Contenedor de granel intermedio de plástico rígido, autoportante y presurizado"),
    ("XZJ", "Contenedor de granel intermedio de plástico rígido, con equipo estructural para líquidos"),
    ("XZK", "Contenedor de granel intermedio de plástico rígido, autoportante, líquidos"),
    ("XZL", "Contenedor de granel intermedio, compuesto y plástico rígido, sólidos"),
    ("XZM", "Contenedor de granel intermedio, compuesto y plástico flexible, sólidos"),
    ("XZN", "Contenedor de granel intermedio, compuesto y plástico rígido, presurizado"),
    ("XZP", "Contenedor de granel intermedio, compuesto y plástico flexible, presurizado"),
    ("XZQ", "Contenedor de granel intermedio, compuesto y plástico rígido, líquidos"),
    ("XZR", "Contenedor de granel intermedio, compuesto y plástico flexible, líquidos"),
    ("XZS", "Contenedor de granel intermedio, compuesto"),
    ("XZT", "Contenedor de granel intermedio, cartón"),
    ("XZU", "Contenedor de granel intermedio, flexible"),
    ("XZV", "Contenedor de granel intermedio de metal, distinto del acero"),
    ("XZW", "Contenedor de granel intermedio, de madera natural"),
    ("XZX", "Contenedor de granel intermedio, de contrachapado"),
    ("XZY", "Contenedor de granel intermedio, de madera reconstituida"),
    ("XZZ", "Mutuamente definido"),
    ("YDK", "Yarda cuadrada"),
    ("YDQ", "Yarda cúbica"),
    ("YRD", "Yarda"),
    ("Z11", "Contenedor colgante"),
    ("Z9", "Nanomol"),
    ("ZP", "Página"),
    ("ZZ", "Mutuamente definido"),
];
